/// Liveness probe.
pub(crate) async fn health() -> &'static str {
    "ok"
}
