use std::{sync::LazyLock, time::Duration};

use folio_utils::folio_version;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let version = folio_version();

    format!("Folio Contact Relay ({homepage}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
};

pub fn client(timeout: Duration, connect_timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(&*USER_AGENT)
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .build()
}
