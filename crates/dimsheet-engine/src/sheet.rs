//! The expression sheet: an ordered record list with focus state and a
//! coalesced evaluate-and-merge cycle.
//!
//! All mutations happen synchronously in response to one logical event; the
//! evaluator call is the only suspension point. Content (ids plus math and
//! unit text) carries a revision counter: every real edit bumps it, a batch
//! is dispatched for a specific revision, and the sheet counts as dirty
//! until a batch built from the latest revision has been merged back. Edits
//! that land while a batch is in flight leave the sheet dirty, so the next
//! cycle re-dispatches; stale responses merge harmlessly by id.

use dimsheet_model::{EvalOutcome, ExpressionRecord, RecordId, RecordIdGen};
use tracing::{debug, warn};

use crate::evaluator::{EvalRequest, EvalResult, Evaluator, EvaluatorError};

/// Which input field of a record a focus request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Math,
    Unit,
}

/// Pending request that the host move input focus; drained with
/// [`ExpressionSheet::take_focus_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub index: usize,
    pub field: FocusField,
}

/// Ordered, never-empty collection of expression records.
#[derive(Debug)]
pub struct ExpressionSheet {
    records: Vec<ExpressionRecord>,
    focused: usize,
    ids: RecordIdGen,
    /// Revision of the current content.
    revision: u64,
    /// Revision whose results have been merged back.
    evaluated_revision: u64,
    /// Revision the outstanding batch was built from, while one is out.
    inflight: Option<u64>,
    pending_focus: Option<FocusRequest>,
}

impl ExpressionSheet {
    /// A fresh sheet: one empty record, focused, not yet evaluated, with
    /// the initial focus request already pending.
    #[must_use]
    pub fn new() -> Self {
        let mut ids = RecordIdGen::new();
        let first = ExpressionRecord::empty(ids.next_id());
        Self {
            records: vec![first],
            focused: 0,
            ids,
            revision: 1,
            evaluated_revision: 0,
            inflight: None,
            pending_focus: Some(FocusRequest {
                index: 0,
                field: FocusField::Math,
            }),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ExpressionRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, id: RecordId) -> Option<&ExpressionRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// Whether the latest content revision still awaits a merged evaluation.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.revision != self.evaluated_revision
    }

    /// Drains the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<FocusRequest> {
        self.pending_focus.take()
    }

    // ---- edits ------------------------------------------------------------

    /// Replaces the math text of `id`. Identical text is a no-op and does
    /// not re-dirty the sheet.
    pub fn edit_math(&mut self, id: RecordId, text: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if self.records[index].math_text == text {
            return;
        }
        self.records[index].math_text = text.to_string();
        self.touch();
    }

    /// Replaces the unit text of `id`. Identical text is a no-op.
    ///
    /// The `unit_from_evaluation` flag is left alone here; the next merge
    /// overwrites it with whatever the evaluator reports.
    pub fn edit_unit(&mut self, id: RecordId, text: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if self.records[index].unit_text == text {
            return;
        }
        self.records[index].unit_text = text.to_string();
        self.touch();
    }

    // ---- navigation -------------------------------------------------------

    /// Enter on a record: inserts a fresh empty record right after it and
    /// focuses the new record. Blank records ignore Enter.
    pub fn press_enter(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if self.records[index].is_blank() {
            return;
        }
        let fresh = ExpressionRecord::empty(self.ids.next_id());
        self.records.insert(index + 1, fresh);
        self.touch();
        self.set_focus(index + 1);
    }

    /// Backspace in an already-empty math field (the input surface gates
    /// on emptiness). The sole remaining record is cleared in place instead
    /// of removed; otherwise the record is removed and focus is repaired.
    pub fn press_backspace(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };

        if self.records.len() == 1 {
            let record = &mut self.records[0];
            if !record.math_text.is_empty() || !record.unit_text.is_empty() {
                record.clear_content();
                self.touch();
            }
            return;
        }

        self.records.remove(index);
        self.touch();
        if index == self.focused {
            self.set_focus(index.saturating_sub(1));
        } else if index < self.focused {
            // Keep focus on the same logical record at its new index.
            self.set_focus(self.focused - 1);
        }
    }

    pub fn arrow_up(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if index > 0 {
            self.set_focus(index - 1);
        }
    }

    pub fn arrow_down(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if index + 1 < self.records.len() {
            self.set_focus(index + 1);
        }
    }

    /// Click on a record: moves list focus to that index.
    pub fn focus_record(&mut self, index: usize) {
        if index < self.records.len() {
            self.set_focus(index);
        }
    }

    /// Cursor leaving a math field to the left: previous record, if any.
    pub fn cursor_left_out(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if index > 0 {
            self.set_focus(index - 1);
        }
    }

    /// Cursor leaving a math field to the right: this record's unit field
    /// when it has unit text (typed or evaluator-resolved), else the next
    /// record.
    pub fn cursor_right_out(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if self.records[index].has_unit() {
            self.request_field_focus(index, FocusField::Unit);
        } else if index + 1 < self.records.len() {
            self.set_focus(index + 1);
        }
    }

    /// Cursor leaving a unit field to the left: back to the math field of
    /// the same record.
    pub fn unit_cursor_left_out(&mut self, id: RecordId) {
        if let Some(index) = self.index_of(id) {
            self.request_field_focus(index, FocusField::Math);
        }
    }

    /// Cursor leaving a unit field to the right: next record, if any.
    pub fn unit_cursor_right_out(&mut self, id: RecordId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        if index + 1 < self.records.len() {
            self.set_focus(index + 1);
        }
    }

    // ---- evaluation -------------------------------------------------------

    /// Snapshots the current content as an ordered batch, at most one batch
    /// in flight at a time. `None` when clean or when a batch is already
    /// out.
    pub fn begin_evaluation(&mut self) -> Option<Vec<EvalRequest>> {
        if self.inflight.is_some() || !self.is_dirty() {
            return None;
        }
        self.inflight = Some(self.revision);
        let batch: Vec<EvalRequest> = self
            .records
            .iter()
            .map(|record| EvalRequest {
                id: record.id,
                math_text: record.math_text.clone(),
                unit_text: record.unit_text.clone(),
            })
            .collect();
        debug!(records = batch.len(), revision = self.revision, "dispatching evaluation batch");
        Some(batch)
    }

    /// Merges a batch response strictly by id: records missing from the
    /// response keep their state, unknown ids are ignored, order is
    /// irrelevant. An evaluator-resolved unit overwrites the record's unit
    /// text; when that actually changes content, the sheet re-dirties so
    /// the next cycle converges.
    pub fn apply_results(&mut self, results: Vec<EvalResult>) {
        let mut merged = 0usize;
        let mut ignored = 0usize;
        let mut units_changed = false;

        for result in results {
            let Some(record) = self.records.iter_mut().find(|record| record.id == result.id)
            else {
                ignored += 1;
                continue;
            };
            if record.unit_text != result.unit_text {
                units_changed = true;
            }
            merge_result(record, result);
            merged += 1;
        }

        if let Some(batch_revision) = self.inflight.take() {
            self.evaluated_revision = self.evaluated_revision.max(batch_revision);
        }
        if units_changed {
            self.touch();
        }
        debug!(merged, ignored, dirty = self.is_dirty(), "merged evaluation results");
    }

    /// One full cycle against the injected evaluator capability.
    ///
    /// A capability failure writes the uniform error message into every
    /// record of the pending batch and leaves the sheet dirty, so the
    /// engine retries once the capability is available; user edits are
    /// never discarded.
    pub fn evaluate(&mut self, evaluator: &dyn Evaluator) {
        let Some(batch) = self.begin_evaluation() else {
            return;
        };
        match evaluator.evaluate_batch(&batch) {
            Ok(results) => self.apply_results(results),
            Err(error) => self.fail_batch(&batch, &error),
        }
    }

    /// Marks the content dirty so the next cycle re-evaluates everything.
    pub fn force_refresh(&mut self) {
        self.touch();
    }

    // ---- persistence boundary --------------------------------------------

    /// Content pairs (math text, unit text) in list order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        self.records
            .iter()
            .map(|record| (record.math_text.clone(), record.unit_text.clone()))
            .collect()
    }

    /// Replaces the whole sheet with loaded content. Ids are freshly
    /// assigned, focus resets to the top, and the sheet is dirty; empty
    /// input yields the usual single empty record.
    pub fn load(&mut self, lines: &[(String, String)]) {
        let records: Vec<ExpressionRecord> = lines
            .iter()
            .map(|(math, unit)| ExpressionRecord::with_content(self.ids.next_id(), math, unit))
            .collect();
        self.records = records;
        if self.records.is_empty() {
            let id = self.ids.next_id();
            self.records.push(ExpressionRecord::empty(id));
        }
        self.focused = 0;
        self.pending_focus = Some(FocusRequest {
            index: 0,
            field: FocusField::Math,
        });
        self.inflight = None;
        self.touch();
    }

    // ---- internals --------------------------------------------------------

    fn index_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// List-level focus move; emits only when the index actually changes.
    fn set_focus(&mut self, index: usize) {
        if index != self.focused {
            self.focused = index;
            self.pending_focus = Some(FocusRequest {
                index,
                field: FocusField::Math,
            });
        }
    }

    /// Direct field focus; always emits, never moves list focus.
    fn request_field_focus(&mut self, index: usize, field: FocusField) {
        self.pending_focus = Some(FocusRequest { index, field });
    }

    fn fail_batch(&mut self, batch: &[EvalRequest], error: &EvaluatorError) {
        warn!(%error, records = batch.len(), "evaluation batch failed");
        let message = error.to_string();
        for request in batch {
            if let Some(record) = self
                .records
                .iter_mut()
                .find(|record| record.id == request.id)
            {
                record.outcome = Some(EvalOutcome::Error {
                    message: message.clone(),
                });
            }
        }
        // evaluated_revision stays behind: the sheet remains dirty and the
        // next cycle retries.
        self.inflight = None;
    }
}

impl Default for ExpressionSheet {
    fn default() -> Self {
        Self::new()
    }
}

fn merge_result(record: &mut ExpressionRecord, result: EvalResult) {
    record.unit_text = result.unit_text;
    record.unit_from_evaluation = result.unit_from_evaluation;
    record.outcome = if let Some(message) = result.error {
        Some(EvalOutcome::Error { message })
    } else if let Some(value_latex) = result.value_latex {
        Some(EvalOutcome::Value {
            value_latex,
            value: result.value,
            unit_vec: result.unit_vec,
            unit_latex: result.unit_latex.unwrap_or_default(),
        })
    } else {
        None
    };
}
