// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod commit;
mod emoji;
mod prefix;

pub use commit::*;
pub use emoji::*;
pub use prefix::*;
