use crate::errors::Result;
use crate::rsvps::rsvps_model::{MealCount, NewRsvp, Rsvp, RsvpStats, RsvpSubmission};
use async_trait::async_trait;

/// Trait for RSVP repository operations
#[async_trait]
pub trait RsvpRepositoryTrait: Send + Sync {
    async fn insert_rsvp(&self, new_rsvp: NewRsvp) -> Result<Rsvp>;
    /// All rows, newest first.
    fn load_rsvps(&self) -> Result<Vec<Rsvp>>;
    async fn delete_rsvp(&self, rsvp_id: i32) -> Result<usize>;
    fn count_rsvps(&self) -> Result<i64>;
    fn sum_guests(&self) -> Result<i64>;
    /// Counts per non-null meal, highest count first.
    fn count_meals(&self) -> Result<Vec<MealCount>>;
}

/// Trait for RSVP service operations
#[async_trait]
pub trait RsvpServiceTrait: Send + Sync {
    async fn create_rsvp(&self, submission: RsvpSubmission) -> Result<Rsvp>;
    fn get_rsvps(&self) -> Result<Vec<Rsvp>>;
    async fn delete_rsvp(&self, rsvp_id: i32) -> Result<()>;
    fn get_stats(&self) -> Result<RsvpStats>;
    fn export_csv(&self) -> Result<String>;
}
