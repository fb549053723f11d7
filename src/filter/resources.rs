//! Per-resource filter configurations
//!
//! One filter per list endpoint. Every field defaults to unset, so an empty
//! filter block includes every record. Field names match the user-facing
//! configuration keys; unknown keys are rejected when deserializing.

use serde::{Deserialize, Serialize};

use super::check::Check;
use super::engine::RecordFilter;
use crate::domain::{
    Healthcheck, Incident, Maintenance, Monitor, Named, OptionalBool, OptionalString, Outage,
    StatusPage,
};

/// Name-only filter usable with any named record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameFilter {
    pub name_regex: OptionalString,
}

impl<R: Named> RecordFilter<R> for NameFilter {
    const KIND: &'static str = "named";

    fn checks<'a>(&'a self, record: &'a R) -> Vec<Check<'a>> {
        vec![Check::name_regex(record.name(), &self.name_regex)]
    }
}

/// Filter for the monitors list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonitorFilter {
    pub name_regex: OptionalString,
    /// `http`, `https`, `tcp`, `icmp` or `udp`
    pub protocol: OptionalString,
    pub paused: OptionalBool,
    pub status: OptionalString,
    pub project_uuid: OptionalString,
}

impl RecordFilter<Monitor> for MonitorFilter {
    const KIND: &'static str = "monitor";

    fn checks<'a>(&'a self, monitor: &'a Monitor) -> Vec<Check<'a>> {
        vec![
            Check::name_regex(&monitor.name, &self.name_regex),
            Check::exact("protocol", &monitor.protocol, &self.protocol),
            Check::boolean("paused", monitor.paused, &self.paused),
            Check::exact("status", &monitor.status, &self.status),
            Check::exact("project_uuid", &monitor.project_uuid, &self.project_uuid),
        ]
    }
}

/// Filter for the incidents list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncidentFilter {
    pub name_regex: OptionalString,
    /// Compared against the latest update type (`investigating`,
    /// `identified`, `monitoring`, `resolved`, ...)
    pub status: OptionalString,
    pub severity: OptionalString,
}

impl RecordFilter<Incident> for IncidentFilter {
    const KIND: &'static str = "incident";

    fn checks<'a>(&'a self, incident: &'a Incident) -> Vec<Check<'a>> {
        vec![
            Check::name_regex(incident.title.english(), &self.name_regex),
            Check::exact_optional("status", incident.current_status(), &self.status),
            Check::exact_optional("severity", incident.severity.as_deref(), &self.severity),
        ]
    }
}

/// Filter for the maintenance windows list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintenanceFilter {
    pub name_regex: OptionalString,
    pub status: OptionalString,
}

impl RecordFilter<Maintenance> for MaintenanceFilter {
    const KIND: &'static str = "maintenance";

    fn checks<'a>(&'a self, window: &'a Maintenance) -> Vec<Check<'a>> {
        vec![
            Check::name_regex_or(window.title.english(), &window.name, &self.name_regex),
            Check::exact("status", &window.status, &self.status),
        ]
    }
}

/// Filter for the healthchecks list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthcheckFilter {
    pub name_regex: OptionalString,
    /// `up` or `down`
    pub status: OptionalString,
}

impl RecordFilter<Healthcheck> for HealthcheckFilter {
    const KIND: &'static str = "healthcheck";

    fn checks<'a>(&'a self, healthcheck: &'a Healthcheck) -> Vec<Check<'a>> {
        vec![
            Check::name_regex(&healthcheck.name, &self.name_regex),
            Check::up_down("status", healthcheck.is_down, &self.status),
        ]
    }
}

/// Filter for the outages list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutageFilter {
    /// Matched against the affected monitor's name
    pub name_regex: OptionalString,
    pub monitor_uuid: OptionalString,
}

impl RecordFilter<Outage> for OutageFilter {
    const KIND: &'static str = "outage";

    fn checks<'a>(&'a self, outage: &'a Outage) -> Vec<Check<'a>> {
        vec![
            Check::name_regex(&outage.monitor.name, &self.name_regex),
            Check::exact("monitor_uuid", &outage.monitor.uuid, &self.monitor_uuid),
        ]
    }
}

/// Filter for the status pages list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusPageFilter {
    pub name_regex: OptionalString,
    pub hostname: OptionalString,
}

impl RecordFilter<StatusPage> for StatusPageFilter {
    const KIND: &'static str = "statuspage";

    fn checks<'a>(&'a self, page: &'a StatusPage) -> Vec<Check<'a>> {
        vec![
            Check::name_regex(&page.name, &self.name_regex),
            Check::exact_optional("hostname", page.hostname.as_deref(), &self.hostname),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IncidentUpdate, OptionalValue};
    use crate::filter::{Diagnostics, FilterEngine};

    fn include<R, F: RecordFilter<R>>(record: &R, filter: &F) -> (bool, Diagnostics) {
        let diagnostics = Diagnostics::new();
        let included = FilterEngine::default().should_include(record, Some(filter), &diagnostics);
        (included, diagnostics)
    }

    #[test]
    fn monitor_filter_combines_fields() {
        let monitor = Monitor::new("mon_1", "[PROD]-API", "https").with_paused(false);
        let filter = MonitorFilter {
            name_regex: OptionalValue::known(r"\[PROD\]-.*"),
            protocol: OptionalValue::known("https"),
            paused: OptionalValue::Known(false),
            ..Default::default()
        };
        assert!(include(&monitor, &filter).0);

        let paused = monitor.clone().with_paused(true);
        assert!(!include(&paused, &filter).0);
    }

    #[test]
    fn monitor_filter_project_and_status() {
        let monitor = Monitor::new("mon_1", "api", "http")
            .with_status("down")
            .with_project("proj_1");
        let filter = MonitorFilter {
            status: OptionalValue::known("down"),
            project_uuid: OptionalValue::known("proj_1"),
            ..Default::default()
        };
        assert!(include(&monitor, &filter).0);

        let filter = MonitorFilter {
            project_uuid: OptionalValue::known("proj_2"),
            ..filter
        };
        assert!(!include(&monitor, &filter).0);
    }

    #[test]
    fn incident_status_compares_latest_update() {
        let incident = Incident::new("inci_1", "Database outage", "outage")
            .with_severity("major")
            .with_update(IncidentUpdate::new("2026-01-01T10:00:00Z", "investigating"))
            .with_update(IncidentUpdate::new("2026-01-01T11:00:00Z", "resolved"));
        let filter = IncidentFilter {
            status: OptionalValue::known("resolved"),
            severity: OptionalValue::known("major"),
            ..Default::default()
        };
        assert!(include(&incident, &filter).0);

        let filter = IncidentFilter {
            status: OptionalValue::known("investigating"),
            ..Default::default()
        };
        assert!(!include(&incident, &filter).0);

        let filter = IncidentFilter {
            status: OptionalValue::known("outage"),
            ..Default::default()
        };
        assert!(!include(&incident, &filter).0);
    }

    #[test]
    fn incident_without_updates_fails_status_filter() {
        let incident = Incident::new("inci_1", "Latency", "incident");
        let filter = IncidentFilter {
            status: OptionalValue::known("investigating"),
            ..Default::default()
        };
        let (included, diagnostics) = include(&incident, &filter);
        assert!(!included);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn incident_without_severity_fails_severity_filter() {
        let incident = Incident::new("inci_1", "Latency", "incident");
        let filter = IncidentFilter {
            severity: OptionalValue::known("minor"),
            ..Default::default()
        };
        assert!(!include(&incident, &filter).0);
        assert!(include(&incident, &IncidentFilter::default()).0);
    }

    #[test]
    fn maintenance_name_falls_back_to_internal_name() {
        let window = Maintenance::new("mw_1", "db-upgrade", "Database upgrade")
            .with_status("upcoming");
        let by_name = MaintenanceFilter {
            name_regex: OptionalValue::known("^db-"),
            ..Default::default()
        };
        assert!(include(&window, &by_name).0);

        let by_title = MaintenanceFilter {
            name_regex: OptionalValue::known("^Database"),
            status: OptionalValue::known("upcoming"),
        };
        assert!(include(&window, &by_title).0);

        let neither = MaintenanceFilter {
            name_regex: OptionalValue::known("^cache"),
            ..Default::default()
        };
        assert!(!include(&window, &neither).0);
    }

    #[test]
    fn maintenance_invalid_pattern_reported_once_per_record() {
        let window = Maintenance::new("mw_1", "db", "Database");
        let filter = MaintenanceFilter {
            name_regex: OptionalValue::known("[invalid"),
            ..Default::default()
        };
        let (included, diagnostics) = include(&window, &filter);
        assert!(!included);
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn healthcheck_up_down() {
        let down = Healthcheck::new("tok_1", "nightly-backup", true);
        let up = Healthcheck::new("tok_2", "hourly-sync", false);
        let filter = HealthcheckFilter {
            status: OptionalValue::known("down"),
            ..Default::default()
        };
        assert!(include(&down, &filter).0);
        assert!(!include(&up, &filter).0);
    }

    #[test]
    fn healthcheck_unrecognised_status_is_an_error() {
        let healthcheck = Healthcheck::new("tok_1", "nightly-backup", false);
        let filter = HealthcheckFilter {
            status: OptionalValue::known("paused"),
            ..Default::default()
        };
        let (included, diagnostics) = include(&healthcheck, &filter);
        assert!(!included);
        let errors = diagnostics.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].summary, "Invalid filter status");
    }

    #[test]
    fn outage_matches_monitor() {
        let outage = Outage::new("out_1", "mon_1", "Checkout API");
        let filter = OutageFilter {
            name_regex: OptionalValue::known("Checkout"),
            monitor_uuid: OptionalValue::known("mon_1"),
        };
        assert!(include(&outage, &filter).0);

        let filter = OutageFilter {
            monitor_uuid: OptionalValue::known("mon_2"),
            ..Default::default()
        };
        assert!(!include(&outage, &filter).0);
    }

    #[test]
    fn status_page_hostname() {
        let page = StatusPage::new("sp_1", "Production Status").with_hostname("status.example.com");
        let bare = StatusPage::new("sp_2", "Staging Status");
        let filter = StatusPageFilter {
            hostname: OptionalValue::known("status.example.com"),
            ..Default::default()
        };
        assert!(include(&page, &filter).0);
        assert!(!include(&bare, &filter).0);

        let filter = StatusPageFilter {
            name_regex: OptionalValue::known("^Staging"),
            hostname: OptionalValue::Unknown,
        };
        assert!(include(&bare, &filter).0);
    }

    #[test]
    fn status_page_name_ignores_settings_name() {
        let mut page = StatusPage::new("sp_1", "Production Status");
        page.settings.name = "Acme".to_string();
        let filter = StatusPageFilter {
            name_regex: OptionalValue::known("^Production"),
            ..Default::default()
        };
        assert!(include(&page, &filter).0);

        let filter = StatusPageFilter {
            name_regex: OptionalValue::known("^Acme"),
            ..Default::default()
        };
        assert!(!include(&page, &filter).0);
    }

    #[test]
    fn name_filter_works_for_any_named_record() {
        let filter = NameFilter {
            name_regex: OptionalValue::known("backup"),
        };
        assert!(include(&Healthcheck::new("tok_1", "nightly-backup", false), &filter).0);
        assert!(!include(&Monitor::new("mon_1", "api", "https"), &filter).0);
    }

    #[test]
    fn deserializes_filter_blocks() {
        let filter: MonitorFilter =
            serde_json::from_str(r#"{"name_regex": "^api", "paused": false}"#).unwrap();
        assert_eq!(filter.name_regex.as_deref(), Some("^api"));
        assert_eq!(filter.paused, OptionalValue::Known(false));
        assert!(filter.protocol.is_unset());

        let result: Result<MonitorFilter, _> = serde_json::from_str(r#"{"protokol": "http"}"#);
        assert!(result.is_err());
    }
}
