/*!
Preparation of a context for deduction.

Seeding happens once, on the first [step](crate::context::Context::step):
1. Each premise which is a biconditional is replaced by the two implications of the biconditional.
   The implications are queued as deductions, and so are returned as steps.
2. Every other premise is admitted as an axiom, in the order written.
   A premise equivalent to some earlier premise is dropped, and a premise equivalent to the negation of some earlier premise is an error.
3. Interest is checked between each pair of admitted premises.
4. Rules are applied to the premises, as though each premise had just been admitted.
*/

use crate::{
    context::{Context, ContextState},
    db::axiom::Admission,
    misc::log::targets::{self},
    rules::{Application, Rule},
    types::err::ErrorKind,
};

impl Context {
    pub(crate) fn seed(&mut self) -> Result<(), ErrorKind> {
        self.state = ContextState::Deducing;

        let premises = self.premises.clone();
        for premise in premises {
            match self.apply_rule(Rule::BiconditionalElimination, &[premise])? {
                Application::Produced(deductions) => {
                    log::trace!(target: targets::STEP, "Eliminated biconditional {}", premise.id);
                    self.queue_deductions(deductions);
                }

                Application::Inapplicable | Application::Deferred => {
                    match self.axioms.admit(premise, &self.expressions)? {
                        Admission::Fresh => self.counters.admitted += 1,
                        Admission::Duplicate(existing) => {
                            log::info!(target: targets::STEP, "Premise {} duplicates {existing}", premise.id);
                        }
                    }
                }
            }
        }

        let count = self.axioms.len();
        for i in 0..count {
            for j in i + 1..count {
                if let (Some(a), Some(b)) = (self.axioms.get(i), self.axioms.get(j)) {
                    self.check_interest(b, a)?;
                }
            }
        }

        for index in 0..count {
            self.apply_rules(index)?;
        }

        log::info!(target: targets::STEP, "Seeded with {count} axioms and {} deductions", self.deductions.len());
        Ok(())
    }
}
