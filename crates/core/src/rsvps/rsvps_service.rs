use crate::errors::Result;
use crate::export::rsvps_to_csv;
use crate::rsvps::rsvps_model::{Rsvp, RsvpStats, RsvpSubmission};
use crate::rsvps::rsvps_traits::{RsvpRepositoryTrait, RsvpServiceTrait};
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

pub struct RsvpService {
    rsvp_repo: Arc<dyn RsvpRepositoryTrait>,
}

impl RsvpService {
    pub fn new(rsvp_repo: Arc<dyn RsvpRepositoryTrait>) -> Self {
        RsvpService { rsvp_repo }
    }
}

#[async_trait]
impl RsvpServiceTrait for RsvpService {
    async fn create_rsvp(&self, submission: RsvpSubmission) -> Result<Rsvp> {
        let new_rsvp = submission.normalize()?;
        let created = self.rsvp_repo.insert_rsvp(new_rsvp).await?;
        info!(
            "RSVP #{} received ({} guest(s))",
            created.id, created.guests
        );
        Ok(created)
    }

    fn get_rsvps(&self) -> Result<Vec<Rsvp>> {
        self.rsvp_repo.load_rsvps()
    }

    async fn delete_rsvp(&self, rsvp_id: i32) -> Result<()> {
        let removed = self.rsvp_repo.delete_rsvp(rsvp_id).await?;
        debug!("Deleted RSVP #{} ({} row(s))", rsvp_id, removed);
        Ok(())
    }

    fn get_stats(&self) -> Result<RsvpStats> {
        Ok(RsvpStats {
            rsvps: self.rsvp_repo.count_rsvps()?,
            guests: self.rsvp_repo.sum_guests()?,
            meals: self.rsvp_repo.count_meals()?,
        })
    }

    fn export_csv(&self) -> Result<String> {
        let rsvps = self.rsvp_repo.load_rsvps()?;
        rsvps_to_csv(&rsvps)
    }
}
