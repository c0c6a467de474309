//! Raw bindings to a system-installed libsqlite3.
//!
//! Enable the `libsqlite3` feature to link against the system library and
//! `sqlite_icu` (or `icu`) to link ICU as well. Without `libsqlite3` nothing
//! is linked here and the embedded engine is expected to come from elsewhere.

/// Whether this build links the system sqlite
pub const SYSTEM_LIBSQLITE3: bool = cfg!(feature = "libsqlite3");

/// Whether this build links ICU
pub const ICU: bool = cfg!(feature = "sqlite_icu");

#[cfg(feature = "libsqlite3")]
#[allow(non_snake_case)]
extern "C" {
    pub fn sqlite3_libversion() -> *const ::std::os::raw::c_char;
    pub fn sqlite3_libversion_number() -> ::std::os::raw::c_int;
    pub fn sqlite3_sourceid() -> *const ::std::os::raw::c_char;
    pub fn sqlite3_compileoption_used(
        zOptName: *const ::std::os::raw::c_char,
    ) -> ::std::os::raw::c_int;
}
