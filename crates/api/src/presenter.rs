// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{TimeslotPrompt, WarehousePrompt};

/// Shows choices and alerts to the operator.
///
/// Presenting never blocks: the workflow registers the pending selection
/// first and resumes only when the operator answers with its token.
pub trait SelectionPresenter: Send + Sync {
    /// Offers the warehouses of one row.
    fn present_warehouses(&self, prompt: &WarehousePrompt);

    /// Offers the timeslots of the chosen warehouse.
    fn present_timeslots(&self, prompt: &TimeslotPrompt);

    /// Reports a failure the operator should see.
    fn alert(&self, message: &str);
}
