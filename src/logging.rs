use env_logger::Env;

/// 로그 초기화
///
/// 기본 레벨은 info, --verbose면 debug. RUST_LOG가 있으면 그쪽이 우선한다.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
