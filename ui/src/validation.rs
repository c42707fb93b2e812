/// Check of user-supplied input before it reaches the settings store or the
/// engine.
///
/// The [`Configuration`](crate::configuration::Configuration) facade accepts
/// any name or key; validators run at the command-line boundary only.
///
/// # Examples
///
/// ```
/// use cutlass::theme::validation::SchemeNameValidator;
/// use cutlass::validation::Validator;
///
/// assert!(SchemeNameValidator.validate("solarized").is_ok());
/// assert!(SchemeNameValidator.validate("../etc/passwd").is_err());
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}
