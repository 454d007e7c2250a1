//! `goals/` endpoints.

use duna_core::entities::Goal;
use duna_core::requests::NewGoal;

use crate::{ApiClient, error::ClientError};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    pub async fn goals(&self) -> Result<Vec<Goal>, ClientError> {
        self.get("goals/").await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend rejects the goal.
    pub async fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ClientError> {
        self.post("goals/", goal).await
    }
}
