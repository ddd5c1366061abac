//! Creation and last-update timestamp columns for entities that track them.
//!
//! An entity opts in by implementing [`Timestamped`], naming the pair of
//! columns that hold its timestamps, and calling [`touch`] from its
//! `ActiveModelBehavior::before_save`.

use sea_orm::entity::prelude::*;

/// Column the storage layer writes creation time to unless told otherwise.
pub const DEFAULT_CREATED_AT: &str = "created_at";
/// Column the storage layer writes last-update time to unless told otherwise.
pub const DEFAULT_UPDATED_AT: &str = "updated_at";

/// The pair of columns holding an entity's creation and last-update time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampColumns<C> {
    pub created_at: C,
    pub updated_at: C,
}

impl<C: ColumnTrait> TimestampColumns<C> {
    /// Returns the `(created, updated)` column names.
    pub fn names(&self) -> (&str, &str) {
        (self.created_at.as_str(), self.updated_at.as_str())
    }

    /// Whether both columns use the storage layer's default names.
    pub fn is_default(&self) -> bool {
        self.names() == (DEFAULT_CREATED_AT, DEFAULT_UPDATED_AT)
    }
}

/// Entities whose rows record when they were created and last updated.
pub trait Timestamped: EntityTrait {
    const TIMESTAMPS: TimestampColumns<Self::Column>;
}

/// Raised when the live schema does not carry an entity's timestamp columns.
#[derive(Debug, thiserror::Error)]
#[error("Table '{table}' has no timestamp columns '{created_at}' and '{updated_at}': {source}")]
pub struct MappingError {
    pub table: String,
    pub created_at: String,
    pub updated_at: String,
    #[source]
    pub source: DbErr,
}

impl MappingError {
    /// Attributes the failed operation `source` to `E`'s timestamp columns.
    pub fn for_entity<E: Timestamped>(source: DbErr) -> Self {
        let columns = E::TIMESTAMPS;
        let (created_at, updated_at) = columns.names();
        MappingError {
            table: E::default().table_name().to_owned(),
            created_at: created_at.to_owned(),
            updated_at: updated_at.to_owned(),
            source,
        }
    }
}

/// Stamps `now` onto the timestamp columns of a model about to be saved.
///
/// On insert both columns are written; on update only the last-update
/// column is. A column the caller has explicitly `Set` is left alone, and no
/// other column is touched.
pub fn touch<A>(model: &mut A, insert: bool, now: DateTimeUtc)
where
    A: ActiveModelTrait,
    A::Entity: Timestamped,
{
    let columns = <A::Entity as Timestamped>::TIMESTAMPS;
    if insert && !model.get(columns.created_at).is_set() {
        model.set(columns.created_at, now.into());
    }
    if !model.get(columns.updated_at).is_set() {
        model.set(columns.updated_at, now.into());
    }
}
