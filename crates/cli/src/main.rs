// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # wdw-reminders
//!
//! Prints when the dining and `FastPass+` booking windows open for a Walt
//! Disney World arrival date and, given an email address, registers a
//! reminder with the notification service.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use std::time::Duration;

use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{bail, eyre},
};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use wdw_reminders::SubmissionOutcome;
use wdw_reminders_api::{
    ClientConfig, DEFAULT_TIMEOUT, Environment, HttpNotificationClient, SubmissionController,
};
use wdw_reminders_domain::{DEFAULT_DISPLAY_TIME, parse_timezone};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run().await {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// WDW Reminders - find out when Walt Disney World reservations open
#[derive(Debug, Parser)]
#[command(name = "wdw-reminders", author, version, about, long_about = None)]
struct Args {
    /// Arrival date (YYYY-MM-DD, MM/DD/YYYY or RFC 3339)
    #[arg(short, long)]
    arrival: String,

    /// Email address for the reminder; without it only the windows are printed
    #[arg(short, long)]
    email: Option<String>,

    /// Phone number for a text reminder
    #[arg(short, long)]
    phone: Option<String>,

    /// Not staying at a Disney resort hotel
    #[arg(long)]
    off_property: bool,

    /// Notification service to use
    #[arg(long, env = "WDW_REMINDERS_ENV", default_value_t = Environment::Production)]
    environment: Environment,

    /// Base URL overriding the environment's notification service
    #[arg(long, env = "WDW_REMINDERS_BASE_URL")]
    base_url: Option<String>,

    /// Seconds to wait for the notification service
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    /// Time zone the open dates are shown in
    #[arg(long, default_value = "America/New_York", value_parser = parse_timezone)]
    display_zone: Tz,

    /// Time of day shown next to the open dates
    #[arg(long, default_value = DEFAULT_DISPLAY_TIME)]
    display_time: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    async fn run(self) -> Result<()> {
        let config: ClientConfig = self.client_config()?;
        debug!(endpoint = %config.submit_url(), "Using notification service");

        let client: HttpNotificationClient = HttpNotificationClient::new(&config)?;
        let mut controller = SubmissionController::new(client, config);

        if !controller.pick_arrival(&self.arrival)? {
            bail!("'{}' is not a valid arrival date", self.arrival);
        }
        controller.set_staying_on_property(!self.off_property)?;

        let summaries = controller.window_summaries(&Utc::now());
        for line in render::render_windows(&summaries, !self.off_property) {
            println!("{line}");
        }

        let Some(email) = &self.email else {
            return Ok(());
        };
        controller.set_email(email)?;
        if let Some(phone) = &self.phone {
            controller.set_phone(phone)?;
        }

        if let Some(blocker) = controller.state().submit_blocker() {
            bail!("Cannot register a reminder: {blocker}");
        }

        let outcome: SubmissionOutcome = controller.submit().await?.clone();
        for line in render::render_outcome(controller.state()) {
            println!("{line}");
        }

        match outcome {
            SubmissionOutcome::Succeeded => Ok(()),
            _ => Err(eyre!("The reminder was not registered")),
        }
    }

    fn client_config(&self) -> Result<ClientConfig> {
        let mut config: ClientConfig = ClientConfig::for_environment(self.environment)
            .with_timeout(Duration::from_secs(self.timeout_secs))?
            .with_display_zone(self.display_zone)
            .with_display_time(&self.display_time);

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }

        Ok(config)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use wdw_reminders_api::{DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL};

    fn parse(extra: &[&str]) -> Args {
        let mut argv: Vec<&str> = vec!["wdw-reminders", "--arrival", "2025-12-25"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args: Args = Args::try_parse_from([
            "wdw-reminders",
            "--arrival",
            "2025-12-25",
            "--environment",
            "production",
        ])
        .unwrap();

        assert!(args.email.is_none());
        assert!(!args.off_property);
        assert_eq!(args.timeout_secs, 15);
        assert_eq!(args.display_zone, chrono_tz::America::New_York);
        assert_eq!(args.display_time, "7:00am EST");
        assert_eq!(args.log_level(), LevelFilter::INFO);

        let config: ClientConfig = args.client_config().unwrap();
        assert_eq!(config.base_url(), PRODUCTION_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_arrival_is_required() {
        assert!(Args::try_parse_from(["wdw-reminders"]).is_err());
    }

    #[test]
    fn test_development_environment() {
        let args: Args = parse(&["--environment", "dev"]);
        assert_eq!(args.environment, Environment::Development);
        assert_eq!(
            args.client_config().unwrap().base_url(),
            DEVELOPMENT_BASE_URL
        );
    }

    #[test]
    fn test_unknown_environment_is_rejected() {
        let argv = ["wdw-reminders", "--arrival", "2025-12-25", "--environment", "staging"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_base_url_override() {
        let args: Args = parse(&["--base-url", "http://127.0.0.1:9000/"]);
        assert_eq!(
            args.client_config().unwrap().submit_url(),
            "http://127.0.0.1:9000/api/submitEmail"
        );
    }

    #[test]
    fn test_bad_base_url_fails_config() {
        let args: Args = parse(&["--base-url", "ftp://example.com"]);
        assert!(args.client_config().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let argv = ["wdw-reminders", "--arrival", "2025-12-25", "--timeout-secs", "0"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_display_zone_is_parsed() {
        let args: Args = parse(&["--display-zone", "America/Los_Angeles"]);
        assert_eq!(args.display_zone, chrono_tz::America::Los_Angeles);

        let argv = ["wdw-reminders", "--arrival", "2025-12-25", "--display-zone", "Mars/Base"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_contact_and_stay_flags() {
        let args: Args = parse(&[
            "--email",
            "guest@example.com",
            "--phone",
            "407-555-0199",
            "--off-property",
            "-vv",
        ]);

        assert_eq!(args.email.as_deref(), Some("guest@example.com"));
        assert_eq!(args.phone.as_deref(), Some("407-555-0199"));
        assert!(args.off_property);
        assert_eq!(args.log_level(), LevelFilter::TRACE);
    }
}
