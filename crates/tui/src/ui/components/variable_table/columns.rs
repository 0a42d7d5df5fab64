use std::cmp::Ordering;

use envtable_types::EnvironmentVariable;

/// Field a column is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Value,
}

impl Column {
    /// The bound field of `variable`.
    pub fn field<'a>(&self, variable: &'a EnvironmentVariable) -> &'a str {
        match self {
            Column::Name => &variable.name,
            Column::Value => &variable.value,
        }
    }

    pub fn def(&self) -> &'static ColumnDef {
        match self {
            Column::Name => &COLUMNS[0],
            Column::Value => &COLUMNS[1],
        }
    }
}

/// Static description of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub column: Column,
    pub label: &'static str,
    /// Share of the available width, in percent.
    pub width_percent: u16,
    pub sortable: bool,
}

pub const COLUMNS: [ColumnDef; 2] = [
    ColumnDef {
        column: Column::Name,
        label: "Name",
        width_percent: 40,
        sortable: true,
    },
    ColumnDef {
        column: Column::Value,
        label: "Value",
        width_percent: 60,
        sortable: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header glyph shown next to the sorted column label.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort: one column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Next sort after the header of `column` is activated.
    ///
    /// Re-activating the sorted column flips its direction; any other column
    /// starts ascending. Unsortable columns leave `current` untouched.
    pub fn toggled(current: Option<SortState>, column: Column) -> Option<SortState> {
        if !column.def().sortable {
            return current;
        }
        match current {
            Some(sort) if sort.column == column => Some(SortState {
                column,
                direction: sort.direction.reversed(),
            }),
            _ => Some(SortState::ascending(column)),
        }
    }

    fn compare(&self, a: &EnvironmentVariable, b: &EnvironmentVariable) -> Ordering {
        let ordering = self.column.field(a).cmp(self.column.field(b));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sorts `rows` in place. The sort is stable, so equal keys keep their input
/// order; `None` leaves the input order as is.
pub fn sort_rows(rows: &mut [&EnvironmentVariable], sort: Option<SortState>) {
    if let Some(sort) = sort {
        rows.sort_by(|a, b| sort.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(rows: &[&EnvironmentVariable]) -> Vec<String> {
        rows.iter().map(|row| row.name.clone()).collect()
    }

    #[test]
    fn column_widths_split_forty_sixty() {
        let total: u16 = COLUMNS.iter().map(|def| def.width_percent).sum();
        assert_eq!(total, 100);
        assert_eq!(Column::Name.def().width_percent, 40);
        assert_eq!(Column::Value.def().label, "Value");
    }

    #[test]
    fn toggling_cycles_direction_and_switches_columns() {
        let sort = SortState::toggled(None, Column::Name);
        assert_eq!(sort, Some(SortState::ascending(Column::Name)));

        let sort = SortState::toggled(sort, Column::Name);
        assert_eq!(sort, Some(SortState::descending(Column::Name)));

        let sort = SortState::toggled(sort, Column::Value);
        assert_eq!(sort, Some(SortState::ascending(Column::Value)));
    }

    #[test]
    fn sort_by_name_and_value() {
        let a = EnvironmentVariable::new("A", "1");
        let b = EnvironmentVariable::new("B", "2");

        let mut rows = vec![&a, &b];
        sort_rows(&mut rows, Some(SortState::descending(Column::Name)));
        assert_eq!(names(&rows), vec!["B", "A"]);

        sort_rows(&mut rows, Some(SortState::ascending(Column::Value)));
        assert_eq!(names(&rows), vec!["A", "B"]);
    }

    #[test]
    fn equal_keys_keep_input_order_in_both_directions() {
        let first = EnvironmentVariable::new("FIRST", "same");
        let second = EnvironmentVariable::new("SECOND", "same");
        let other = EnvironmentVariable::new("OTHER", "zzz");

        let mut rows = vec![&first, &other, &second];
        sort_rows(&mut rows, Some(SortState::ascending(Column::Value)));
        assert_eq!(names(&rows), vec!["FIRST", "SECOND", "OTHER"]);

        let mut rows = vec![&first, &other, &second];
        sort_rows(&mut rows, Some(SortState::descending(Column::Value)));
        assert_eq!(names(&rows), vec!["OTHER", "FIRST", "SECOND"]);
    }

    #[test]
    fn comparison_is_case_sensitive_bytewise() {
        let lower = EnvironmentVariable::new("alpha", "");
        let upper = EnvironmentVariable::new("Beta", "");

        let mut rows = vec![&lower, &upper];
        sort_rows(&mut rows, Some(SortState::ascending(Column::Name)));
        assert_eq!(names(&rows), vec!["Beta", "alpha"]);
    }

    #[test]
    fn no_sort_keeps_input_order() {
        let z = EnvironmentVariable::new("Z", "");
        let a = EnvironmentVariable::new("A", "");
        let mut rows = vec![&z, &a];
        sort_rows(&mut rows, None);
        assert_eq!(names(&rows), vec!["Z", "A"]);
    }
}
