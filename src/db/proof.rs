/*!
The proof graph, with a node for each premise and each admitted deduction.

Edges run from a deduction to each axiom cited by the deduction, weighted by the rule used.
So, the premises a deduction rests on are those nodes reachable from the deduction without outgoing edges.
*/

use std::collections::{BTreeSet, HashMap};

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::{self, EdgeRef},
    Direction,
};

use crate::{db::AxiomId, rules::Rule};

#[derive(Default)]
pub struct ProofGraph {
    graph: DiGraph<AxiomId, Rule>,
    nodes: HashMap<AxiomId, NodeIndex>,
}

impl ProofGraph {
    pub fn add_premise(&mut self, id: AxiomId) {
        if !self.nodes.contains_key(&id) {
            let node = self.graph.add_node(id);
            self.nodes.insert(id, node);
        }
    }

    /// Adds a deduction, citing `cites`.
    ///
    /// Cited axioms without a node are ignored.
    pub fn add_deduction(&mut self, id: AxiomId, rule: Rule, cites: &[AxiomId]) {
        let node = self.graph.add_node(id);
        self.nodes.insert(id, node);

        for cite in cites {
            if let Some(cited) = self.nodes.get(cite) {
                if self.graph.find_edge(node, *cited).is_none() {
                    self.graph.add_edge(node, *cited, rule);
                }
            }
        }
    }

    /// The axioms directly cited by `id`, and the rule used.
    pub fn cites_of(&self, id: AxiomId) -> Vec<(AxiomId, Rule)> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::default();
        };

        let mut cites = self
            .graph
            .edges_directed(*node, Direction::Outgoing)
            .map(|edge| (self.graph[edge.target()], *edge.weight()))
            .collect::<Vec<_>>();
        cites.sort_by_key(|(cite, _)| *cite);
        cites
    }

    /// The premises `id` ultimately rests on, in ascending order.
    ///
    /// A premise rests on itself.
    pub fn premises_of(&self, id: AxiomId) -> Vec<AxiomId> {
        let Some(node) = self.nodes.get(&id) else {
            return Vec::default();
        };

        let mut premises = BTreeSet::new();
        visit::depth_first_search(&self.graph, Some(*node), |event| {
            if let visit::DfsEvent::Discover(index, _) = event {
                let mut outgoing = self.graph.edges_directed(index, Direction::Outgoing);
                if outgoing.next().is_none() {
                    premises.insert(self.graph[index]);
                }
            }
        });

        premises.into_iter().collect()
    }

    /// A count of axioms in the graph.
    pub fn count(&self) -> usize {
        self.graph.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premises_through_deductions() {
        let mut proof = ProofGraph::default();
        proof.add_premise(1);
        proof.add_premise(2);
        proof.add_premise(3);

        proof.add_deduction(6, Rule::ModusPonens, &[1, 2]);
        proof.add_deduction(8, Rule::Simplification, &[6]);
        proof.add_deduction(10, Rule::HypotheticalSyllogism, &[8, 3]);

        assert_eq!(proof.premises_of(8), vec![1, 2]);
        assert_eq!(proof.premises_of(10), vec![1, 2, 3]);
        assert_eq!(proof.premises_of(3), vec![3]);
        assert_eq!(proof.premises_of(42), Vec::<AxiomId>::new());

        assert_eq!(
            proof.cites_of(10),
            vec![(3, Rule::HypotheticalSyllogism), (8, Rule::HypotheticalSyllogism)]
        );
    }
}
