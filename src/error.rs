//! Error types for board manipulation

/// Errors returned when a disc cannot be placed or a board cannot be built.
///
/// The search never produces these: it only expands columns that
/// [`Board::next_open_row`](crate::Board::next_open_row) reported as open.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is outside the board")]
    InvalidColumn { column: usize },

    #[error("disc at row {row}, column {column} has nothing below it")]
    Floating { row: usize, column: usize },

    #[error("invalid board layout: {0}")]
    Layout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_full_display() {
        let err = MoveError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_invalid_column_display() {
        let err = MoveError::InvalidColumn { column: 9 };
        assert_eq!(err.to_string(), "column 9 is outside the board");
    }

    #[test]
    fn test_floating_display() {
        let err = MoveError::Floating { row: 2, column: 4 };
        assert_eq!(
            err.to_string(),
            "disc at row 2, column 4 has nothing below it"
        );
    }
}
