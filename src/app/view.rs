// SPDX-License-Identifier: MPL-2.0
//! Dashboard layout.

use super::{gates, Message, DEMO_PERMISSIONS};
use crate::access::{Access, Authorizer, Gate, Role, Session};
use crate::i18n::fluent::I18n;
use crate::ui::access_denied::AccessDenied;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::guarded_action::GuardedAction;
use crate::ui::notifications::{self, Toast, ToastKind};
use crate::ui::permission_gate::PermissionGate;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{
    button, checkbox, pick_list, scrollable, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Element, Length};
use std::fmt;
use std::time::{Duration, Instant};

/// Everything the dashboard needs to draw itself.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub notifications: &'a notifications::Manager,
    pub now: Instant,
    pub toast_duration: Duration,
}

/// Role entry of the role picker, labelled in the current locale.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RoleOption {
    role: Role,
    label: String,
}

impl fmt::Display for RoleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header(&ctx))
        .push(permission_toggles(&ctx))
        .push(section(
            ctx.i18n.tr("section-overview-title"),
            PermissionGate::new(
                gates::overview(),
                Text::new(ctx.i18n.tr("section-overview-body")).size(typography::BODY),
            )
            .fallback(placeholder(&gates::overview(), &ctx))
            .view(ctx.session),
        ))
        .push(section(
            ctx.i18n.tr("section-reports-title"),
            PermissionGate::new(gates::reports(), reports_body(&ctx))
                .fallback(placeholder(&gates::reports(), &ctx))
                .view(ctx.session),
        ))
        // No fallback: the administration card stays empty when denied.
        .push(section(
            ctx.i18n.tr("section-admin-title"),
            PermissionGate::new(gates::administration(), admin_body(&ctx)).view(ctx.session),
        ))
        .push(section(
            ctx.i18n.tr("section-notifications-title"),
            notifications_body(&ctx),
        ));

    let base = scrollable(content).width(Length::Fill).height(Length::Fill);
    let overlay =
        Toast::view_overlay(ctx.notifications, ctx.now, ctx.i18n).map(Message::Notification);

    Stack::new().push(base).push(overlay).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("dashboard-title")).size(typography::TITLE_LG);

    let options: Vec<RoleOption> = Role::ALL
        .iter()
        .map(|role| RoleOption {
            role: *role,
            label: ctx.i18n.tr(role.i18n_key()),
        })
        .collect();
    let current = ctx.session.role();
    let selected = options.iter().find(|opt| Some(opt.role) == current).cloned();

    let unknown = ctx
        .i18n
        .tr_with_args("role-unknown", &[("role", ctx.session.role_name())]);
    let picker = pick_list(options, selected, |opt| Message::RoleSelected(opt.role))
        .placeholder(unknown)
        .padding(spacing::XS);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.i18n.tr("role-picker-label")).size(typography::BODY))
        .push(picker)
        .into()
}

fn permission_toggles<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    DEMO_PERMISSIONS
        .iter()
        .fold(
            Row::new()
                .spacing(spacing::MD)
                .push(Text::new(ctx.i18n.tr("permissions-label")).size(typography::BODY)),
            |row, key| {
                let key = *key;
                row.push(
                    checkbox(ctx.session.has_permission(key))
                        .label(key)
                        .on_toggle(move |granted| Message::PermissionToggled {
                            key: key.to_string(),
                            granted,
                        }),
                )
            },
        )
        .into()
}

fn reports_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("section-reports-body")).size(typography::BODY))
        .push(
            GuardedAction::new(
                ctx.i18n.tr("action-export-report"),
                gates::export_report(),
                Message::ExportReport,
            )
            .view(ctx.session, ctx.i18n),
        )
        .into()
}

fn admin_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("section-admin-body")).size(typography::BODY))
        .push(
            GuardedAction::new(
                ctx.i18n.tr("action-manage-users"),
                gates::manage_users(),
                Message::ManageUsers,
            )
            .view(ctx.session, ctx.i18n),
        )
        .into()
}

fn notifications_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let buttons = ToastKind::ALL.iter().fold(Row::new().spacing(spacing::XS), |row, kind| {
        row.push(
            button(Text::new(ctx.i18n.tr(&format!("action-show-{}", kind.as_str()))))
                .on_press(Message::ShowToast(*kind))
                .style(button_styles::primary),
        )
    });

    let millis = ctx.toast_duration.as_millis().to_string();
    let caption = ctx
        .i18n
        .tr_with_args("notifications-duration-caption", &[("millis", millis.as_str())]);

    Column::new()
        .spacing(spacing::SM)
        .push(buttons)
        .push(Text::new(caption).size(typography::CAPTION))
        .push(
            button(Text::new(ctx.i18n.tr("action-export-diagnostics")))
                .on_press(Message::ExportDiagnostics),
        )
        .into()
}

/// Access-denied card for `gate`, or nothing when it grants.
fn placeholder<'a>(gate: &Gate, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match gate.evaluate(ctx.session) {
        Access::Granted => Space::new().into(),
        Access::Denied(denial) => AccessDenied::new(&denial, ctx.i18n).view(),
    }
}

fn section<'a>(title: String, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(container_styles::card)
        .into()
}
