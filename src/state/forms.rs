//! Transient form state, one holder per form.
//!
//! Forms keep raw text exactly as typed; conversion to wire types happens
//! on submit, where local validation can block the request.

use hris_wire::{Credentials, Employee, RegistrationRequest};

use crate::error::ValidationError;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn to_credentials(&self) -> Result<Credentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Credentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    CompanyName,
    Email,
    Password,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub company_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn set(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::CompanyName => self.company_name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
        }
    }

    pub fn to_request(&self) -> Result<RegistrationRequest, ValidationError> {
        let company_name = self.company_name.trim();
        let email = self.email.trim();
        if company_name.is_empty() || email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingRegistrationFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(RegistrationRequest {
            email: email.to_string(),
            password: self.password.clone(),
            company_name: company_name.to_string(),
        })
    }
}

/// Manual entry box of the QR terminal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckinForm {
    pub manual_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    EmployeeId,
    FullName,
    Role,
    Department,
}

/// Create/edit form of the directory.
///
/// `editing` holds the id of the record being edited. While it is set the
/// id field is frozen and submits become updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub role: String,
    pub department: String,
    pub editing: Option<i64>,
}

impl EmployeeForm {
    pub fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::EmployeeId => {
                if self.editing.is_none() {
                    self.employee_id = value;
                }
            }
            EmployeeField::FullName => self.full_name = value,
            EmployeeField::Role => self.role = value,
            EmployeeField::Department => self.department = value,
        }
    }

    pub fn begin_edit(&mut self, employee: &Employee) {
        *self = Self {
            employee_id: employee.employee_id.to_string(),
            full_name: employee.full_name.clone(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            editing: Some(employee.employee_id),
        };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn validate(&self) -> Result<Employee, ValidationError> {
        let fields = [
            &self.employee_id,
            &self.full_name,
            &self.role,
            &self.department,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ValidationError::MissingEmployeeFields);
        }

        let employee_id = match self.editing {
            Some(id) => id,
            None => parse_employee_id(&self.employee_id)?,
        };

        Ok(Employee {
            employee_id,
            full_name: self.full_name.trim().to_string(),
            role: self.role.trim().to_string(),
            department: self.department.trim().to_string(),
        })
    }
}

/// Parse a scanned or typed employee id.
///
/// Only plain decimal digits are accepted (surrounding whitespace such as
/// a scanner's trailing newline is ignored). This is stricter than a
/// leading-number parse: `"42abc"`, `"+42"` and `"-3"` are all rejected
/// rather than read as 42, 42 and -3.
pub fn parse_employee_id(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidEmployeeId);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidEmployeeId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_employee_id() {
        assert_eq!(parse_employee_id("42"), Ok(42));
        assert_eq!(parse_employee_id(" 101\n"), Ok(101));
        assert_eq!(parse_employee_id("abc"), Err(ValidationError::InvalidEmployeeId));
        assert_eq!(parse_employee_id("42abc"), Err(ValidationError::InvalidEmployeeId));
        assert_eq!(parse_employee_id("-3"), Err(ValidationError::InvalidEmployeeId));
        assert_eq!(parse_employee_id(""), Err(ValidationError::InvalidEmployeeId));
        assert_eq!(
            parse_employee_id("99999999999999999999"),
            Err(ValidationError::InvalidEmployeeId)
        );
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut form = LoginForm::default();
        form.set(LoginField::Email, " hr@acme.test ".to_string());
        assert_eq!(form.to_credentials(), Err(ValidationError::MissingCredentials));

        form.set(LoginField::Password, "pw".to_string());
        let credentials = form.to_credentials().unwrap();
        assert_eq!(credentials.email, "hr@acme.test");
        assert_eq!(credentials.password, "pw");
    }

    #[test]
    fn test_registration_password_length() {
        let form = RegistrationForm {
            company_name: "Acme".to_string(),
            email: "a@acme.test".to_string(),
            password: "12345".to_string(),
        };
        assert_eq!(
            form.to_request(),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );

        let form = RegistrationForm {
            password: "123456".to_string(),
            ..form
        };
        assert_eq!(form.to_request().unwrap().company_name, "Acme");
    }

    #[test]
    fn test_employee_form_rejects_blank_department() {
        let form = EmployeeForm {
            employee_id: "7".to_string(),
            full_name: "Ana".to_string(),
            role: "Clerk".to_string(),
            department: "   ".to_string(),
            editing: None,
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingEmployeeFields));
    }

    #[test]
    fn test_employee_form_requires_numeric_id() {
        let form = EmployeeForm {
            employee_id: "E-7".to_string(),
            full_name: "Ana".to_string(),
            role: "Clerk".to_string(),
            department: "Sales".to_string(),
            editing: None,
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmployeeId));
    }

    #[test]
    fn test_edit_freezes_id() {
        let employee = Employee {
            employee_id: 15,
            full_name: "Marta".to_string(),
            role: "Analyst".to_string(),
            department: "Finance".to_string(),
        };
        let mut form = EmployeeForm::default();
        form.begin_edit(&employee);
        form.set(EmployeeField::EmployeeId, "99".to_string());
        form.set(EmployeeField::Role, "Lead".to_string());

        assert_eq!(form.employee_id, "15");
        let updated = form.validate().unwrap();
        assert_eq!(updated.employee_id, 15);
        assert_eq!(updated.role, "Lead");

        form.clear();
        assert_eq!(form, EmployeeForm::default());
        assert!(!form.is_editing());
    }
}
