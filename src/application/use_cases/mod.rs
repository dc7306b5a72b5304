/// Use cases module containing application business logic orchestration
mod edit_boq;
mod resolve_item;
mod show_boq;
mod validate_boq;

pub use edit_boq::EditBoqUseCase;
pub use resolve_item::ResolveItemUseCase;
pub use show_boq::ShowBoqUseCase;
pub use validate_boq::ValidateBoqUseCase;

use crate::boq_engine::domain::ResolutionWarning;
use crate::ports::outbound::ProgressReporter;
use tracing::warn;

/// Forwards resolution warnings to the user and to the log
fn report_warnings<PR: ProgressReporter>(reporter: &PR, warnings: &[ResolutionWarning]) {
    for warning in warnings {
        warn!(item = %warning.item_id(), "{}", warning);
        reporter.report_warning(&warning.to_string());
    }
}
