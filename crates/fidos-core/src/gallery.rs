use fidos_api::GitHubClient;
use tracing::debug;

use crate::{classify::project_from_repo, models::Project, Result};

/// Builds the portfolio gallery from a GitHub account's public repositories.
///
/// One fetch, one pass: list the repos, drop forks and archived ones, map
/// each survivor through the classifier, and float the curated entries to
/// the front. No caching and no retry; a failed fetch is the caller's
/// problem to present.
pub struct ProjectGallery {
    client: GitHubClient,
}

impl ProjectGallery {
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: GitHubClient::new(token),
        }
    }

    pub fn with_client(client: GitHubClient) -> Self {
        Self { client }
    }

    pub async fn fetch_projects(&self, username: &str) -> Result<Vec<Project>> {
        let repos = self.client.list_user_repos(username).await?;
        let total = repos.len();

        let mut projects: Vec<Project> = repos
            .iter()
            .filter(|r| !r.fork && !r.archived)
            .map(project_from_repo)
            .collect();

        debug!(
            "Classified {} of {} repositories for {}",
            projects.len(),
            total,
            username
        );

        // Stable partition: featured first, relative order otherwise untouched
        projects.sort_by_key(|p| !p.featured);

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use serde_json::json;

    fn repo_json(id: u64, name: &str, fork: bool, archived: bool) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("fid/{}", name),
            "description": "A dashboard for data pipelines",
            "html_url": format!("https://github.com/fid/{}", name),
            "homepage": null,
            "language": "TypeScript",
            "topics": [],
            "created_at": "2023-01-15T10:00:00Z",
            "updated_at": "2024-06-01T12:30:00Z",
            "fork": fork,
            "archived": archived,
            "stargazers_count": 12
        })
    }

    async fn gallery_for(server: &mockito::Server) -> ProjectGallery {
        ProjectGallery::with_client(GitHubClient::with_base_url(None, server.url()))
    }

    #[tokio::test]
    async fn test_forks_and_archived_are_excluded() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/users/fid/repos")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                json!([
                    repo_json(1, "some-fork", true, false),
                    repo_json(2, "old-stuff", false, true),
                    repo_json(3, "FidOS", false, false),
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let projects = gallery_for(&server).await.fetch_projects("fid").await.unwrap();

        assert_eq!(projects.len(), 1);
        let p = &projects[0];
        assert_eq!(p.title, "FidOS - macOS-Inspired Portfolio");
        assert_eq!(p.category, Category::Data);
        assert!(p.featured);
    }

    #[tokio::test]
    async fn test_featured_projects_come_first_in_stable_order() {
        let mut server = mockito::Server::new_async().await;

        // API order: plain-a, FidOS, plain-b, nyc-taxi-pipeline
        server
            .mock("GET", "/users/fid/repos")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                json!([
                    repo_json(1, "plain-a", false, false),
                    repo_json(2, "FidOS", false, false),
                    repo_json(3, "plain-b", false, false),
                    repo_json(4, "nyc-taxi-pipeline", false, false),
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let projects = gallery_for(&server).await.fetch_projects("fid").await.unwrap();

        let ids: Vec<u64> = projects.iter().map(|p| p.id).collect();
        // Featured keep their relative order (2 before 4), same for the rest
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert!(projects[0].featured && projects[1].featured);
        assert!(!projects[2].featured && !projects[3].featured);
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates_status() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/users/fid/repos")
            .match_query(mockito::Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let result = gallery_for(&server).await.fetch_projects("fid").await;

        match result {
            Err(crate::Error::Api(fidos_api::GitHubError::RequestFailed(status))) => {
                assert_eq!(status, 404)
            }
            other => panic!("expected a 404 API error, got {:?}", other),
        }
    }
}
