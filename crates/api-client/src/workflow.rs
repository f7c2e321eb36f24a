use shared_types::{ConfirmDoseRequest, DailyStatus, DoseItem, RequestError};

use crate::api::AdherenceApi;

/// Confirm `dose` for `user_id`, then reload today's status.
///
/// Local state is never patched: on success the caller receives a fresh
/// snapshot from exactly one reload. A failed confirmation returns before
/// any reload is attempted.
pub async fn confirm_and_reload<A: AdherenceApi>(
    api: &A,
    user_id: &str,
    dose: &DoseItem,
) -> Result<DailyStatus, RequestError> {
    let request = ConfirmDoseRequest::for_dose(user_id, dose);
    api.confirm_dose(&request).await?;
    api.today_status(user_id).await
}
