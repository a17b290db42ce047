//! Headers command - show the response headers and static cache policy

use anyhow::Result;
use clap::Args;

use super::SourceArgs;
use crate::output;

#[derive(Args)]
pub struct HeadersArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: HeadersArgs) -> Result<()> {
    let settings = args.source.load()?;

    output::header("Security headers");
    match &settings.security {
        Some(security) => {
            for (name, value) in security.response_headers() {
                output::field(name, &value);
            }
            output::field(
                "trusted proxy header",
                &format!(
                    "{}: {}",
                    security.proxy_ssl_header.http_header_name(),
                    security.proxy_ssl_header.value,
                ),
            );
            output::field("ssl redirect", &security.ssl_redirect.to_string());
            output::field("secure cookies", &security.session_cookie_secure.to_string());
        }
        None => output::hint("none (development profile)"),
    }
    println!();

    output::header("Static cache policy");
    match &settings.platform {
        Some(tuning) => {
            output::field("Cache-Control", &tuning.cache_control_value());
            output::field("use finders", &tuning.use_finders.to_string());
            output::field("manifest strict", &tuning.manifest_strict.to_string());
        }
        None => output::hint("default (not running on the hosting platform)"),
    }

    Ok(())
}
