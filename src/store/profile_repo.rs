// src/store/profile_repo.rs

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{common::error::AppError, models::profile::Profile};

#[derive(Clone)]
pub struct ProfileRepository {
    profile: Arc<RwLock<Profile>>,
}

impl ProfileRepository {
    pub fn seeded() -> Self {
        Self {
            profile: Arc::new(RwLock::new(Profile {
                name: "João Silva".to_string(),
                email: "joao@empresa.com".to_string(),
                avatar_url: None,
            })),
        }
    }

    pub async fn get(&self) -> Result<Profile, AppError> {
        let profile = self.profile.read().await;
        Ok(profile.clone())
    }

    pub async fn set(&self, profile: Profile) -> Result<Profile, AppError> {
        let mut slot = self.profile.write().await;
        *slot = profile.clone();
        Ok(profile)
    }
}
