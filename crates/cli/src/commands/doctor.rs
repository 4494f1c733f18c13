use std::net::ToSocketAddrs;

use gavel_core::config::{AppConfig, LoadOptions};
use gavel_core::fees::default_strategies;
use gavel_core::FeeCalculationEngine;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_fee_registry());
            checks.push(check_server_bind(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "fee_registry",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
            checks.push(DoctorCheck {
                name: "server_bind",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_fee_registry() -> DoctorCheck {
    match FeeCalculationEngine::new(default_strategies()) {
        Ok(engine) => DoctorCheck {
            name: "fee_registry",
            status: CheckStatus::Pass,
            details: format!("fee engine constructed with {} strategies", engine.strategy_count()),
        },
        Err(error) => {
            DoctorCheck { name: "fee_registry", status: CheckStatus::Fail, details: error.to_string() }
        }
    }
}

fn check_server_bind(config: &AppConfig) -> DoctorCheck {
    let address = format!("{}:{}", config.server.bind_address, config.server.port);

    match address.to_socket_addrs() {
        Ok(mut resolved) => match resolved.next() {
            Some(first) => DoctorCheck {
                name: "server_bind",
                status: CheckStatus::Pass,
                details: format!("listen address `{address}` resolves to {first}"),
            },
            None => DoctorCheck {
                name: "server_bind",
                status: CheckStatus::Fail,
                details: format!("listen address `{address}` resolves to no addresses"),
            },
        },
        Err(error) => DoctorCheck {
            name: "server_bind",
            status: CheckStatus::Fail,
            details: format!("listen address `{address}` does not resolve: {error}"),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
