//! Statement execution.

use pico_ir::{Block, IfBranch, Stmt, StmtKind};
use pico_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::value::to_boolean;
use crate::Value;

impl Interpreter {
    /// Execute `stmt` for its effect.
    pub fn execute(&mut self, stmt: &Stmt) {
        tracing::trace!(position = stmt.span.start, "execute");
        match &stmt.kind {
            StmtKind::Assign { name, value } => {
                let value = self.evaluate(value);
                self.env.assign(name, value);
            }
            StmtKind::Input { name } => {
                let line = self.input.read_line().unwrap_or_else(|err| {
                    tracing::warn!(%err, "reading input failed; using an empty line");
                    String::new()
                });
                self.env.assign(name, Value::Str(line));
            }
            StmtKind::Output(expr) => {
                let value = self.evaluate(expr);
                if let Err(err) = self.print.write_line(&value.to_string()) {
                    tracing::warn!(%err, "writing output failed");
                }
            }
            StmtKind::Return(expr) => {
                let value = expr
                    .as_ref()
                    .map_or(Value::Undefined, |expr| self.evaluate(expr));
                self.pending_return = Some(value);
            }
            StmtKind::If {
                branches,
                else_block,
            } => self.exec_if(branches, else_block.as_ref()),
            StmtKind::For {
                init,
                condition,
                step,
                body,
            } => {
                self.execute(init);
                while self.pending_return.is_none() && to_boolean(&self.evaluate(condition)) {
                    self.execute_block(body);
                    if self.pending_return.is_some() {
                        break;
                    }
                    self.execute(step);
                }
            }
            StmtKind::Block(block) => self.execute_block(block),
        }
    }

    /// Run statements in order, stopping once a return is pending.
    pub fn execute_block(&mut self, block: &Block) {
        ensure_sufficient_stack(|| {
            for stmt in &block.stmts {
                self.execute(stmt);
                if self.pending_return.is_some() {
                    break;
                }
            }
        });
    }

    /// At most one branch runs: the first whose condition holds, else the
    /// `else` block.
    fn exec_if(&mut self, branches: &[IfBranch], else_block: Option<&Block>) {
        for branch in branches {
            if to_boolean(&self.evaluate(&branch.condition)) {
                self.execute_block(&branch.block);
                return;
            }
        }
        if let Some(block) = else_block {
            self.execute_block(block);
        }
    }
}
