// SPDX-License-Identifier: MPL-2.0
//! Role and permission gating.
//!
//! # Components
//!
//! - [`role`] - The ranked `Role` hierarchy
//! - [`permissions`] - Named boolean capability grants
//! - [`session`] - The `Authorizer` collaborator and its in-memory `Session`
//! - [`gate`] - `Gate` requirements and the resulting `Access` decision
//!
//! Unknown roles and permission keys never raise errors; they resolve to a
//! denial.

mod gate;
mod permissions;
mod role;
mod session;

pub use gate::{Access, Denial, Gate, RoleRequirement};
pub use permissions::Permissions;
pub use role::{Role, UnknownRole};
pub use session::{Authorizer, Session};
