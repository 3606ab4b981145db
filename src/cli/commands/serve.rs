use std::net::IpAddr;

use crate::config::SiteConfig;
use crate::error::SiteResult;
use crate::server::{self, Config};

pub async fn serve(config: &SiteConfig, host: IpAddr, port: u16) -> SiteResult<()> {
    server::init_tracing();
    let page = config.page_view()?;
    server::run(Config { host, port }, &page).await
}
