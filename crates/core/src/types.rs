/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Release dates carry no time component.
pub type ReleaseDate = chrono::NaiveDate;
