//! Error shared by the geography repositories.

use super::define_port_error;

define_port_error! {
    /// Failure reported by a repository adapter.
    pub enum RepositoryError {
        /// The store could not be reached or the connection dropped.
        Connection => "repository connection failed",
        /// The statement was rejected for a reason other than integrity.
        Query => "repository query failed",
        /// A unique, foreign key, not-null or check constraint fired.
        Constraint => "repository constraint violated",
    }
}

impl RepositoryError {
    /// True for integrity violations, which services report as conflicts.
    #[must_use]
    pub const fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RepositoryError::connection("pool timed out"), false)]
    #[case(RepositoryError::query("syntax error"), false)]
    #[case(RepositoryError::constraint("duplicate key"), true)]
    fn only_constraint_is_an_integrity_violation(
        #[case] error: RepositoryError,
        #[case] expected: bool,
    ) {
        assert_eq!(error.is_constraint(), expected);
    }

    #[rstest]
    fn message_strips_the_variant_prefix() {
        let error = RepositoryError::query("relation \"cities\" does not exist");
        assert_eq!(error.message(), "relation \"cities\" does not exist");
        assert_eq!(
            error.to_string(),
            "repository query failed: relation \"cities\" does not exist"
        );
    }
}
