use scraper::Selector;

/// Selectors are compile-time literals, so a parse failure is a bug.
pub(super) fn compile(selector: &str) -> Selector {
    Selector::parse(selector)
        .unwrap_or_else(|e| panic!("Error parsing static selector {selector}: {e:?}"))
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: std::sync::LazyLock<scraper::Selector> =
            std::sync::LazyLock::new(|| $crate::parse::static_selector::compile($sel));
    };
}
