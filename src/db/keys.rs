slotmap::new_key_type! {
    /// A key to a node of the [expression database](crate::db::expression).
    pub struct ExprKey;
}

/// The id of an axiom.
///
/// Ids are also the line of the axiom in a written proof.
/// The id of a premise is the line the premise was read from, and deduced axioms are numbered from the line after the premises.
pub type AxiomId = usize;
