//! FFI bindings for nutriplan
//!
//! This module provides C-compatible functions for calling nutriplan from a
//! desktop shell written in another language. All functions use C strings
//! (null-terminated) and return allocated memory that must be freed by the
//! caller using `nutri_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::error::ComputeError;
use crate::pipeline::{form_to_json, plan_to_json};

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Shared body of the JSON entry points
unsafe fn call_json(
    json: *const c_char,
    f: fn(String) -> Result<String, ComputeError>,
) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match f(json_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Calculation API
// ============================================================================

/// Compute a report from a `PlanInput` JSON object.
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `nutri_free_string`.
/// - Returns NULL on error; call `nutri_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn nutri_plan_json(json: *const c_char) -> *mut c_char {
    call_json(json, plan_to_json)
}

/// Compute a report from a `RawForm` JSON object (fields as typed by a user).
///
/// # Safety
/// - `json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `nutri_free_string`.
/// - Returns NULL on error (including invalid form data); call
///   `nutri_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn nutri_form_json(json: *const c_char) -> *mut c_char {
    call_json(json, form_to_json)
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by nutriplan functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a nutriplan function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn nutri_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next nutriplan call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn nutri_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the nutriplan library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn nutri_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn sample_plan_json() -> CString {
        CString::new(
            r#"{
                "weight_kg": 80.0,
                "height_cm": 180.0,
                "age_years": 25,
                "gender": "male",
                "diet_phase": "maintenance",
                "activity_level": "moderate",
                "meal_count": 4
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ffi_plan_json() {
        let json = sample_plan_json();

        unsafe {
            let result = nutri_plan_json(json.as_ptr());
            assert!(!result.is_null());
            assert!(nutri_last_error().is_null());

            let result_str = CStr::from_ptr(result).to_str().unwrap();
            assert!(result_str.contains("report_version"));
            assert!(result_str.contains("\"total_kcal\": 2797"));

            nutri_free_string(result);
        }
    }

    #[test]
    fn test_ffi_form_json() {
        let json = CString::new(
            r#"{
                "weight": "80,0 kg",
                "height": "180",
                "age": "25",
                "gender": "Masculino",
                "diet_phase": "Manutenção",
                "activity_level": "Moderado",
                "meal_count": "4"
            }"#,
        )
        .unwrap();

        unsafe {
            let result = nutri_form_json(json.as_ptr());
            assert!(!result.is_null());
            nutri_free_string(result);
        }
    }

    #[test]
    fn test_ffi_error_handling() {
        unsafe {
            let invalid_json = CString::new("not json").unwrap();
            let result = nutri_plan_json(invalid_json.as_ptr());
            assert!(result.is_null());

            let error = nutri_last_error();
            assert!(!error.is_null());
            let error_str = CStr::from_ptr(error).to_str().unwrap();
            assert!(error_str.starts_with("Invalid JSON"));

            let result = nutri_plan_json(ptr::null());
            assert!(result.is_null());
            let error_str = CStr::from_ptr(nutri_last_error()).to_str().unwrap();
            assert_eq!(error_str, "Invalid JSON string pointer");
        }
    }

    #[test]
    fn test_ffi_invalid_form() {
        let json = CString::new(r#"{ "weight": "0", "height": "180", "age": "25" }"#).unwrap();

        unsafe {
            let result = nutri_form_json(json.as_ptr());
            assert!(result.is_null());

            let error_str = CStr::from_ptr(nutri_last_error()).to_str().unwrap();
            assert!(error_str.starts_with("Invalid input"));
        }
    }

    #[test]
    fn test_ffi_free_null_is_noop() {
        unsafe {
            nutri_free_string(ptr::null_mut());
        }
    }

    #[test]
    fn test_ffi_version() {
        unsafe {
            let version = nutri_version();
            assert!(!version.is_null());

            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert_eq!(version_str, crate::NUTRIPLAN_VERSION);
        }
    }
}
