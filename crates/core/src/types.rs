/// Staff roster identifier (small integer ids in the reference roster).
pub type StaffId = i64;
