//! Table dependency graph for the menagerie schema.
//!
//! A table must exist before anything that references it, so creation order is
//! derived from the foreign-key edges instead of being written out by hand.
//! Drop order is the reverse; the migration runner already reverts operations
//! in reverse order, so only the forward order is computed here. Adding a
//! table later means adding one [`SchemaTable`] variant and one [`TableNode`]
//! entry, not re-checking four call sites.

/// The tables of the menagerie schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SchemaTable {
    Zoos,
    Species,
    Animals,
    ZoosAnimals,
}

/// A table together with the tables its foreign keys point at.
pub(crate) struct TableNode {
    pub table: SchemaTable,
    pub references: &'static [SchemaTable],
}

/// Every table in the schema with its outgoing foreign-key edges.
pub(crate) const TABLES: &[TableNode] = &[
    TableNode {
        table: SchemaTable::Zoos,
        references: &[],
    },
    TableNode {
        table: SchemaTable::Species,
        references: &[],
    },
    TableNode {
        table: SchemaTable::Animals,
        references: &[SchemaTable::Species],
    },
    TableNode {
        table: SchemaTable::ZoosAnimals,
        references: &[SchemaTable::Zoos, SchemaTable::Animals],
    },
];

/// Tables ordered so that every referenced table precedes its referrers.
///
/// Ties between unconstrained tables keep declaration order, so the result is
/// deterministic. Each pass over an acyclic graph places at least one table,
/// so `TABLES.len()` passes always suffice; a reference cycle would leave
/// tables unplaced, which the unit tests reject.
pub(crate) fn creation_order() -> Vec<SchemaTable> {
    let mut placed: Vec<SchemaTable> = Vec::with_capacity(TABLES.len());

    for _ in 0..TABLES.len() {
        for node in TABLES {
            if placed.contains(&node.table) {
                continue;
            }
            if node.references.iter().all(|dep| placed.contains(dep)) {
                placed.push(node.table);
            }
        }
    }

    placed
}
