/// Minimum valid year (inclusive)
pub const MIN_YEAR: u32 = 1;
/// Maximum valid year (inclusive); year arithmetic saturates here
pub const MAX_YEAR: u32 = u32::MAX;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;
/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Days in a week
pub const DAYS_IN_WEEK: usize = 7;
/// Rows in a padded month grid
pub const MONTH_GRID_ROWS: usize = 6;
/// Cells in a padded month grid (6 rows of 7 days)
pub const MONTH_GRID_CELLS: usize = MONTH_GRID_ROWS * DAYS_IN_WEEK;
/// Months in a year
pub const MONTHS_IN_YEAR: usize = 12;
