// self
use crate::{_prelude::*, obs::ConstructionKind};

/// A span wrapping a single value construction.
#[derive(Clone, Debug)]
pub struct ConstructionSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ConstructionSpan {
	/// Creates a new span tagged with the provided construction kind.
	pub fn new(kind: ConstructionKind) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("user_principal.construct", kind = kind.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = kind;

			Self {}
		}
	}

	/// Enters the span until the returned guard is dropped.
	pub fn entered(self) -> ConstructionSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ConstructionSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ConstructionSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ConstructionSpan::entered`].
pub struct ConstructionSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ConstructionSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ConstructionSpanGuard(..)")
	}
}

/// Emits a `debug` event describing why a construction was rejected.
pub fn trace_rejection(kind: ConstructionKind, reason: &'static str) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(kind = kind.as_str(), reason, "construction rejected");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, reason);
	}
}
