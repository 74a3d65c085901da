//! Full HSTS audit aggregation
//!
//! Runs the preload check, redirect scenarios, subdomain probes and path
//! scan for one domain, then folds the outcomes into a letter grade.

use crate::checks::{
    PathOutcome, PathScanner, PreloadChecker, PreloadInfo, PreloadStatus, RedirectOutcome,
    RedirectProber, SubdomainOutcome, SubdomainProber,
};
use crate::config::Settings;
use crate::error::Result;
use crate::hsts::HstsResult;
use serde::Serialize;
use tracing::debug;

/// Audit letter grade, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

/// Overall audit verdict derived from the grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallStatus {
    Ok,
    Warning,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Ok => "ok",
            OverallStatus::Warning => "warning",
        }
    }

    fn from_grade(grade: Grade) -> Self {
        match grade {
            Grade::A | Grade::B => OverallStatus::Ok,
            _ => OverallStatus::Warning,
        }
    }
}

/// Aggregated audit result for one domain
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub domain: String,
    pub hsts: HstsResult,
    pub preload: PreloadInfo,
    pub redirects: Vec<RedirectOutcome>,
    pub subdomains: Vec<SubdomainOutcome>,
    pub paths: Vec<PathOutcome>,
    pub grade: Grade,
    pub overall_status: OverallStatus,
}

/// Derive the audit grade from the individual probe outputs
///
/// Each predicate downgrades cumulatively; a later check can only lower
/// the grade, never raise it. Pure function, so the grading policy is
/// testable without any network access.
pub fn derive_grade(
    hsts: &HstsResult,
    preload: &PreloadInfo,
    redirects: &[RedirectOutcome],
    subdomains: &[SubdomainOutcome],
    paths: &[PathOutcome],
) -> Grade {
    let mut grade = Grade::A;

    if !hsts.ok {
        grade = Grade::B;
    }
    if preload.status != PreloadStatus::Preloaded {
        grade = Grade::C;
    }
    if redirects.iter().any(|r| !r.https_enforced) {
        grade = Grade::D;
    }
    if subdomains.iter().any(|s| s.status.is_error()) {
        grade = Grade::D;
    }
    if paths.iter().any(|p| p.status.is_error()) {
        grade = Grade::E;
    }

    grade
}

/// Audit orchestrator
pub struct Auditor {
    settings: Settings,
}

impl Auditor {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the full audit for a normalized domain
    ///
    /// Probes run sequentially; only a failure to set up the root-level
    /// preload check aborts the audit, every other failure is captured in
    /// the corresponding outcome.
    pub async fn run(&self, domain: &str) -> Result<AuditReport> {
        let preload_checker = PreloadChecker::new(&self.settings.http, &self.settings.probes)?;
        let (hsts, preload) = preload_checker.check(domain).await;
        debug!("root HSTS ok={} preload={}", hsts.ok, preload.status.as_str());

        let redirects = RedirectProber::new(&self.settings.http)?
            .check_scenarios(domain)
            .await;

        let subdomains = SubdomainProber::new(&self.settings.http, &self.settings.probes)?
            .check_subdomains(domain)
            .await?;

        let paths = PathScanner::new(&self.settings.http)?
            .scan_paths(domain, &self.settings.probes.audit_paths)
            .await;

        let grade = derive_grade(&hsts, &preload, &redirects, &subdomains, &paths);
        let overall_status = OverallStatus::from_grade(grade);

        Ok(AuditReport {
            domain: domain.to_string(),
            hsts,
            preload,
            redirects,
            subdomains,
            paths,
            grade,
            overall_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{PathStatus, SubdomainStatus};
    use crate::hsts::validate_hsts;

    fn clean_hsts() -> HstsResult {
        validate_hsts(Some("max-age=31536000; includeSubDomains; preload"))
    }

    fn preload_info(status: PreloadStatus) -> PreloadInfo {
        PreloadInfo {
            status,
            eligible: true,
        }
    }

    fn enforced_redirect(scenario: &str) -> RedirectOutcome {
        RedirectOutcome {
            scenario: scenario.to_string(),
            start_url: "http://example.com/".to_string(),
            final_url: Some("https://example.com/".to_string()),
            status: Some(200),
            history: vec![(301, "http://example.com/".to_string())],
            https_enforced: true,
            error: None,
        }
    }

    fn clean_subdomain(host: &str) -> SubdomainOutcome {
        SubdomainOutcome {
            host: host.to_string(),
            status: SubdomainStatus::Https(clean_hsts()),
        }
    }

    fn clean_path(path: &str) -> PathOutcome {
        PathOutcome {
            path: path.to_string(),
            status: PathStatus::Hsts(clean_hsts()),
        }
    }

    #[test]
    fn test_all_clean_grades_a() {
        let grade = derive_grade(
            &clean_hsts(),
            &preload_info(PreloadStatus::Preloaded),
            &[enforced_redirect("http_root"), enforced_redirect("http_www")],
            &[clean_subdomain("www.example.com")],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::A);
        assert_eq!(OverallStatus::from_grade(grade), OverallStatus::Ok);
    }

    #[test]
    fn test_invalid_root_hsts_grades_b() {
        let grade = derive_grade(
            &validate_hsts(Some("max-age=abc")),
            &preload_info(PreloadStatus::Preloaded),
            &[enforced_redirect("http_root")],
            &[clean_subdomain("www.example.com")],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::B);
        assert_eq!(OverallStatus::from_grade(grade), OverallStatus::Ok);
    }

    #[test]
    fn test_not_preloaded_grades_c() {
        let grade = derive_grade(
            &clean_hsts(),
            &preload_info(PreloadStatus::NotPreloaded),
            &[enforced_redirect("http_root")],
            &[clean_subdomain("www.example.com")],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::C);
        assert_eq!(OverallStatus::from_grade(grade), OverallStatus::Warning);
    }

    #[test]
    fn test_unreachable_root_grades_c_via_unknown_preload() {
        // a dead root yields the connection_error fallback and skips the
        // list lookup, so membership can never read as preloaded
        let grade = derive_grade(
            &HstsResult::connection_error(),
            &PreloadInfo::unavailable(),
            &[enforced_redirect("http_root"), enforced_redirect("http_www")],
            &[clean_subdomain("www.example.com")],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::C);
        assert_eq!(OverallStatus::from_grade(grade), OverallStatus::Warning);
    }

    #[test]
    fn test_unenforced_redirect_grades_d() {
        let mut redirect = enforced_redirect("http_root");
        redirect.https_enforced = false;
        let grade = derive_grade(
            &clean_hsts(),
            &preload_info(PreloadStatus::Preloaded),
            &[redirect],
            &[clean_subdomain("www.example.com")],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::D);
    }

    #[test]
    fn test_subdomain_error_downgrades_regardless_of_other_checks() {
        let broken = SubdomainOutcome {
            host: "api.example.com".to_string(),
            status: SubdomainStatus::Error("connection refused".to_string()),
        };
        let grade = derive_grade(
            &clean_hsts(),
            &preload_info(PreloadStatus::Preloaded),
            &[enforced_redirect("http_root"), enforced_redirect("http_www")],
            &[clean_subdomain("www.example.com"), broken],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::D);
        assert_eq!(OverallStatus::from_grade(grade), OverallStatus::Warning);
    }

    #[test]
    fn test_no_dns_subdomain_is_not_an_error() {
        let absent = SubdomainOutcome {
            host: "cdn.example.com".to_string(),
            status: SubdomainStatus::NoDns,
        };
        let grade = derive_grade(
            &clean_hsts(),
            &preload_info(PreloadStatus::Preloaded),
            &[enforced_redirect("http_root")],
            &[absent],
            &[clean_path("/")],
        );
        assert_eq!(grade, Grade::A);
    }

    #[test]
    fn test_path_error_grades_e() {
        let broken = PathOutcome {
            path: "/login".to_string(),
            status: PathStatus::Error("error: timeout".to_string()),
        };
        let grade = derive_grade(
            &clean_hsts(),
            &preload_info(PreloadStatus::Preloaded),
            &[enforced_redirect("http_root")],
            &[clean_subdomain("www.example.com")],
            &[clean_path("/"), broken],
        );
        assert_eq!(grade, Grade::E);
        assert_eq!(OverallStatus::from_grade(grade), OverallStatus::Warning);
    }

    #[test]
    fn test_downgrades_are_cumulative() {
        // every predicate fires at once; the last one wins
        let mut redirect = enforced_redirect("http_root");
        redirect.https_enforced = false;
        let broken_sub = SubdomainOutcome {
            host: "api.example.com".to_string(),
            status: SubdomainStatus::Error("refused".to_string()),
        };
        let broken_path = PathOutcome {
            path: "/".to_string(),
            status: PathStatus::Error("error: timeout".to_string()),
        };
        let grade = derive_grade(
            &validate_hsts(None),
            &preload_info(PreloadStatus::Unknown),
            &[redirect],
            &[broken_sub],
            &[broken_path],
        );
        assert_eq!(grade, Grade::E);
    }
}
