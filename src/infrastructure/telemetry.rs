use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Full failure detail from the repository layer lands on this channel;
/// user-facing notices stay detail-free. Safe to call more than once
/// (later calls are no-ops), which keeps test setup simple.
pub fn init() {
  let _ = tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "billbook=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .try_init();
}
