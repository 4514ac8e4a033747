/*!
A step of a context.

Each call to [step](Context::step) returns the next line of the proof, if any.

Internally, a step takes deductions from the front of the deduction queue until some deduction is admitted as an axiom, or the queue is empty.
For each deduction taken:
- If the deduction is true on every valuation (and tautologies are skipped) the deduction is skipped.
- If the deduction is equivalent to some axiom, the deduction is skipped.
- If the deduction is inconsistent with some axiom, the deduction is returned as a step and the next step is an error.
- Otherwise, the deduction is admitted as an axiom with the next id.
  Interest is checked between the axiom and each earlier axiom, pending rule applications are retried, and rules are applied to the axiom.

An error found after a deduction has been admitted is placed at the front of the deduction queue, and so is returned by the step after the step which returns the deduction.

After an error step, no further steps are returned.
*/

use crate::{
    context::{Context, ContextState, Queued},
    db::axiom::{Admission, Axiom},
    misc::log::targets::{self},
    structures::{deduction::Deduction, step::Step},
    types::err::ErrorKind,
};

impl Context {
    /// The next line of the proof, or None if nothing else can be deduced.
    pub fn step(&mut self) -> Option<Step> {
        if self.state == ContextState::Input {
            if let Err(e) = self.seed() {
                self.fail(e);
            }
        }

        if self.steps.is_empty() && self.state == ContextState::Deducing {
            self.advance();
        }

        let step = self.steps.pop_front();
        match &step {
            Some(step) => {
                self.counters.steps += 1;
                log::info!(target: targets::STEP, "Step {}: {step}", self.counters.steps);
            }

            None => {
                if self.state == ContextState::Deducing {
                    log::info!(target: targets::STEP, "Exhausted after {} steps", self.counters.steps);
                    self.state = ContextState::Exhausted;
                }
            }
        }
        step
    }

    /// Takes deductions from the queue until some step is ready, or the queue is empty.
    fn advance(&mut self) {
        while self.steps.is_empty() {
            let Some(queued) = self.deductions.pop_front() else {
                return;
            };

            match queued {
                Queued::Error(e) => {
                    self.fail(e);
                    return;
                }

                Queued::Deduction(deduction) => {
                    if let Err(e) = self.consider(deduction) {
                        self.fail(e);
                        return;
                    }
                }
            }
        }
    }

    /// Admits the deduction, if the deduction is neither a tautology nor a duplicate.
    fn consider(&mut self, deduction: Deduction) -> Result<(), ErrorKind> {
        let expression = self.expressions.actual(deduction.expression);

        if self.config.skip_tautologies.value {
            if let Ok(true) = self.expressions.is_tautology(expression) {
                log::trace!(target: targets::STEP, "Skipped tautology: {}", deduction.explanation);
                self.counters.tautologies += 1;
                return Ok(());
            }
        }

        let axiom = Axiom {
            id: self.next_axiom_id,
            expression,
        };

        match self.axioms.admit(axiom, &self.expressions) {
            Ok(Admission::Duplicate(_)) => {
                self.counters.duplicates += 1;
                Ok(())
            }

            Ok(Admission::Fresh) => {
                self.counters.admitted += 1;
                self.next_axiom_id += 2;
                self.proof
                    .add_deduction(axiom.id, deduction.rule, &deduction.cites);
                let text = self.write(expression);
                self.steps.push_back(Step::Deduced {
                    id: axiom.id,
                    text,
                    explanation: deduction.explanation,
                });

                if let Err(e) = self.after_admission(axiom) {
                    log::info!(target: targets::QUEUE, "Error queued after {}: {e}", axiom.id);
                    self.deductions.push_front(Queued::Error(e));
                }
                Ok(())
            }

            Err(e) => {
                let text = self.write(expression);
                self.steps.push_back(Step::Deduced {
                    id: axiom.id,
                    text,
                    explanation: deduction.explanation,
                });
                Err(e)
            }
        }
    }

    fn after_admission(&mut self, axiom: Axiom) -> Result<(), ErrorKind> {
        let index = self.axioms.len() - 1;

        for i in 0..index {
            if let Some(earlier) = self.axioms.get(i) {
                self.check_interest(axiom, earlier)?;
            }
        }

        self.retry_pending()?;
        self.apply_rules(index)
    }

    /// Notes the error as a step, after which the context is inconsistent.
    fn fail(&mut self, e: ErrorKind) {
        log::info!(target: targets::STEP, "Inconsistent: {e}");
        self.state = ContextState::Inconsistent;
        self.deductions.clear();
        self.pending.clear();
        self.steps.push_back(Step::Error {
            text: e.to_string(),
        });
    }
}
