// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the session, the toast manager, diagnostics and
//! localization together, and turns messages into state changes. Gated
//! sections are re-evaluated whenever the session changes so that every
//! new denial is recorded once in the diagnostics buffer.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::access::{Access, Authorizer, Gate, Role, Session};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, ToastKind};
use crate::ui::theming::ThemeMode;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

/// Permission needed to export reports.
pub const PERMISSION_EXPORT_REPORTS: &str = "reports.export";
/// Permission needed to manage users.
pub const PERMISSION_MANAGE_USERS: &str = "users.manage";

/// Permissions exposed as toggles in the dashboard header.
pub const DEMO_PERMISSIONS: [&str; 2] = [PERMISSION_EXPORT_REPORTS, PERMISSION_MANAGE_USERS];

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 680.0;

const DIAGNOSTICS_EXPORT_FILE: &str = "diagnostics.json";

/// Named gates guarding the dashboard sections.
pub mod gates {
    use super::{PERMISSION_EXPORT_REPORTS, PERMISSION_MANAGE_USERS};
    use crate::access::{Gate, Role};

    pub fn overview() -> Gate {
        Gate::new().require_role(Role::Viewer)
    }

    pub fn reports() -> Gate {
        Gate::new().require_role(Role::Manager)
    }

    pub fn administration() -> Gate {
        Gate::new().require_role(Role::Admin)
    }

    pub fn export_report() -> Gate {
        Gate::new()
            .require_role(Role::Manager)
            .require_permission(PERMISSION_EXPORT_REPORTS)
    }

    pub fn manage_users() -> Gate {
        Gate::new()
            .require_role(Role::Admin)
            .require_permission(PERMISSION_MANAGE_USERS)
    }

    /// Every gate with the name used in diagnostics.
    pub fn all() -> [(&'static str, Gate); 5] {
        [
            ("overview", overview()),
            ("reports", reports()),
            ("administration", administration()),
            ("export_report", export_report()),
            ("manage_users", manage_users()),
        ]
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    session: Session,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Instant of the last processed message, used to draw transitions.
    now: Instant,
    /// Denial label of each gate as of the last evaluation.
    denials: BTreeMap<&'static str, &'static str>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("role", &self.session.role_name())
            .field("toasts", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires Fn for boot, so clone the flags on each call
    let boot = move || App::new(flags.clone(), Instant::now());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application from flags and the on-disk configuration.
    fn new(flags: Flags, now: Instant) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        let mut app = Self::with_config(flags, config, now);

        if let Some(key) = warning {
            let message = app.i18n.tr(&key);
            app.diagnostics.log(DiagnosticEventKind::Warning {
                message: message.clone(),
            });
            app.notifications.show(message, ToastKind::Warning, now);
        }
        app.drain_diagnostics();

        (app, Task::none())
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(flags: Flags, config: Config, now: Instant) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut session = Session::from_config(&config.session);
        if let Some(role) = flags.role {
            session = Session::new(role, session.permissions().clone());
        }

        let diagnostics = DiagnosticsCollector::new(config.diagnostics_capacity());
        let mut notifications =
            notifications::Manager::with_duration(Duration::from_millis(config.toast_duration_ms()));
        notifications.set_diagnostics(diagnostics.handle());

        let mut app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            session,
            notifications,
            diagnostics,
            now,
            denials: BTreeMap::new(),
        };
        app.record_denials();
        app
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.notifications.has_pending_timers() {
            time::every(Duration::from_millis(config::TOAST_TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle(message, Instant::now());
        Task::none()
    }

    /// Applies a message at `now`.
    pub fn handle(&mut self, message: Message, now: Instant) {
        self.now = now;

        match message {
            Message::Tick(instant) => {
                self.now = instant;
                self.notifications.tick(instant);
            }
            Message::Notification(message) => self.notifications.handle_message(&message, now),
            Message::RoleSelected(role) => {
                self.session.set_role(role);
                self.diagnostics.log(DiagnosticEventKind::RoleChanged {
                    role: role.as_str().to_string(),
                });
                let label = self.i18n.tr(role.i18n_key());
                let message = self
                    .i18n
                    .tr_with_args("notification-role-changed", &[("role", label.as_str())]);
                self.notifications.show(message, ToastKind::Info, now);
                self.record_denials();
            }
            Message::PermissionToggled { key, granted } => {
                self.session.set_permission(key, granted);
                self.record_denials();
            }
            Message::ShowToast(kind) => {
                let message = self.i18n.tr(&format!("notification-sample-{}", kind.as_str()));
                self.notifications.show(message, kind, now);
            }
            Message::ExportReport => self.run_guarded(
                &gates::export_report(),
                "notification-report-exported",
                now,
            ),
            Message::ManageUsers => {
                self.run_guarded(&gates::manage_users(), "notification-users-opened", now);
            }
            Message::ExportDiagnostics => self.export_diagnostics(now),
        }

        self.drain_diagnostics();
    }

    /// Re-checks a gate before acting, since the view may be stale.
    fn run_guarded(&mut self, gate: &Gate, success_key: &str, now: Instant) {
        match gate.evaluate(&self.session) {
            Access::Granted => {
                let message = self.i18n.tr(success_key);
                self.notifications.show(message, ToastKind::Success, now);
            }
            Access::Denied(denial) => {
                let message = crate::ui::access_denied::reason(&denial, &self.i18n);
                self.notifications.show(message, ToastKind::Error, now);
            }
        }
    }

    fn export_diagnostics(&mut self, now: Instant) {
        let Some(mut path) = config::config_dir_with_override(None) else {
            return;
        };
        path.push(DIAGNOSTICS_EXPORT_FILE);

        match self.diagnostics.export_to_file(&path) {
            Ok(()) => {
                let location = path.display().to_string();
                let message = self.i18n.tr_with_args(
                    "notification-diagnostics-exported",
                    &[("path", location.as_str())],
                );
                self.notifications.show(message, ToastKind::Success, now);
            }
            Err(err) => {
                let detail = err.to_string();
                let message = self.i18n.tr_with_args(
                    "notification-diagnostics-export-error",
                    &[("error", detail.as_str())],
                );
                self.diagnostics
                    .log(DiagnosticEventKind::Warning { message: detail });
                self.notifications.show(message, ToastKind::Error, now);
            }
        }
    }

    /// Logs each gate whose denial changed since the last evaluation.
    fn record_denials(&mut self) {
        for (name, gate) in gates::all() {
            match gate.evaluate(&self.session) {
                Access::Granted => {
                    self.denials.remove(name);
                }
                Access::Denied(denial) => {
                    if self.denials.insert(name, denial.label()) != Some(denial.label()) {
                        self.diagnostics.log(DiagnosticEventKind::AccessDenied {
                            gate: name.to_string(),
                            reason: denial.label().to_string(),
                        });
                    }
                }
            }
        }
    }

    fn drain_diagnostics(&mut self) {
        self.diagnostics.process_pending();
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            notifications: &self.notifications,
            now: self.now,
            toast_duration: self.notifications.duration(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current role, or `None` when the session holds an unknown role name.
    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }
}
