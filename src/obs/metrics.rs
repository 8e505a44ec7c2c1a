// self
use crate::obs::{ConstructionKind, Outcome};

/// Records a construction outcome via the global metrics recorder (when enabled).
pub fn record_construction(kind: ConstructionKind, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"user_principal_construction_total",
			"kind" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
