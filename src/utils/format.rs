use rust_decimal::Decimal;

/* Fixed four decimal places with a '.' separator, shared by the table
render and the CSV export so both show the same numbers */
pub fn fmt4(value: Decimal) -> String {
    format!("{:.4}", value)
}
