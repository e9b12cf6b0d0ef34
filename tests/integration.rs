// SPDX-License-Identifier: MPL-2.0
use iced_dashboard::access::{Access, Denial, Gate, Role, Session};
use iced_dashboard::config::{self, Config};
use iced_dashboard::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use iced_dashboard::i18n::fluent::I18n;
use iced_dashboard::ui::notifications::{Manager, Phase, ToastKind, EXIT_TRANSITION};
use std::collections::HashSet;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let mut french = loaded.clone();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write French config file");

    let loaded = config::load_from_path(&path).expect("Failed to load French config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("role-admin"), "Administrateur");
}

#[test]
fn session_from_config_file_drives_gates() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[session]
role = "manager"

[session.permissions]
"reports.export" = true
"users.manage" = false
"#,
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let session = Session::from_config(&loaded.session);
    let export = Gate::new()
        .require_role(Role::Manager)
        .require_permission("reports.export");
    let manage = Gate::new().require_permission("users.manage");
    let admin = Gate::new().require_role(Role::Admin);

    assert!(export.evaluate(&session).is_granted());
    assert_eq!(
        manage.evaluate(&session),
        Access::Denied(Denial::MissingPermission("users.manage".to_string()))
    );
    assert_eq!(
        admin.evaluate(&session),
        Access::Denied(Denial::InsufficientRole {
            current: Role::Manager,
            required: Role::Admin,
        })
    );
}

#[test]
fn unknown_role_in_config_is_denied_everywhere() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[session]\nrole = \"root\"\n\n[session.permissions]\n\"reports.export\" = true\n",
    )
    .expect("write settings");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let session = Session::from_config(&loaded.session);

    for gate in [
        Gate::new(),
        Gate::new().require_role(Role::Viewer),
        Gate::new().require_permission("reports.export"),
    ] {
        assert_eq!(
            gate.evaluate(&session),
            Access::Denied(Denial::UnrecognizedRole)
        );
    }
}

#[test]
fn invalid_config_falls_back_with_translated_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[notifications\nduration_ms = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());

    let key = warning.expect("warning key");
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert!(!i18n.tr(&key).starts_with("MISSING:"));
}

#[test]
fn configured_duration_is_clamped_for_the_manager() {
    let mut settings = Config::default();
    settings.notifications.duration_ms = Some(5);
    let manager = Manager::with_duration(Duration::from_millis(settings.toast_duration_ms()));
    assert_eq!(
        manager.duration(),
        Duration::from_millis(config::MIN_TOAST_DURATION_MS)
    );
}

#[test]
fn toast_lifecycle_is_reported_to_diagnostics() {
    let mut collector = DiagnosticsCollector::new(50);
    let mut manager = Manager::with_duration(Duration::from_millis(100));
    manager.set_diagnostics(collector.handle());

    let t0 = Instant::now();
    let id = manager.show("Exported", ToastKind::Success, t0);

    manager.tick(t0 + Duration::from_millis(99));
    assert_eq!(manager.phase(id, t0 + Duration::from_millis(99)), Some(Phase::Steady));

    manager.tick(t0 + Duration::from_millis(100));
    assert_eq!(manager.phase(id, t0 + Duration::from_millis(100)), Some(Phase::Leaving));
    assert!(!manager.get(id).expect("still present").is_visible());

    manager.tick(t0 + Duration::from_millis(399));
    assert!(manager.get(id).is_some());

    manager.tick(t0 + Duration::from_millis(400));
    assert!(manager.get(id).is_none());

    collector.process_pending();
    let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticEventKind::ToastShown {
                id: id.value(),
                kind: "success".to_string(),
            },
            DiagnosticEventKind::ToastExpired { id: id.value() },
            DiagnosticEventKind::ToastRemoved { id: id.value() },
        ]
    );

    let json = collector.export_json().expect("export");
    assert!(json.contains("toast_expired"));
}

#[test]
fn manual_close_removes_after_exit_transition() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let id = manager.show("Hello", ToastKind::Info, t0);

    let closed_at = t0 + Duration::from_millis(1000);
    assert!(manager.dismiss(id, closed_at));

    manager.tick(closed_at + EXIT_TRANSITION - Duration::from_millis(1));
    assert!(manager.get(id).is_some());
    manager.tick(closed_at + EXIT_TRANSITION);
    assert!(manager.get(id).is_none());

    // The original duration timer was cancelled.
    assert!(!manager.has_pending_timers());
}

#[test]
fn ids_stay_unique_across_rapid_calls() {
    let mut manager = Manager::new();
    let now = Instant::now();
    let ids: HashSet<_> = (0..1000)
        .map(|i| manager.show(format!("toast {i}"), ToastKind::Info, now))
        .collect();
    assert_eq!(ids.len(), 1000);
    assert_eq!(manager.len(), 1000);
}
