//! Staff roster

use crate::error::{require, DashboardError, Result};
use crate::forms::parse_or_zero;
use chrono::NaiveDate;
use sitedesk_model::{Department, Employee, EmploymentStatus};
use sitedesk_store::RecordStore;
use tracing::info;

/// Raw add/edit employee form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    /// Blank picks a placeholder avatar
    pub photo_url: String,
    pub role: String,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub hire_date: NaiveDate,
    /// Monthly salary as typed
    pub salary: String,
    pub status: EmploymentStatus,
}

impl EmployeeForm {
    /// Blank form hired on `today`, in site operations
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            photo_url: String::new(),
            role: String::new(),
            department: Department::SiteOperations,
            email: String::new(),
            phone: String::new(),
            hire_date: today,
            salary: String::new(),
            status: EmploymentStatus::Active,
        }
    }

    /// Form prefilled from an existing record
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            photo_url: employee.photo_url.clone(),
            role: employee.role.clone(),
            department: employee.department,
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            hire_date: employee.hire_date,
            salary: employee.salary.to_string(),
            status: employee.status,
        }
    }

    fn into_employee(self, id: String) -> Employee {
        let photo_url = if self.photo_url.trim().is_empty() {
            format!("https://picsum.photos/seed/{id}/100")
        } else {
            self.photo_url
        };
        Employee {
            salary: parse_or_zero(&self.salary),
            id,
            name: self.name.trim().to_string(),
            photo_url,
            role: self.role,
            department: self.department,
            email: self.email,
            phone: self.phone,
            hire_date: self.hire_date,
            status: self.status,
        }
    }
}

/// Roster headline figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffStats {
    pub total: usize,
    pub active: usize,
    /// Monthly salary bill of active staff, INR
    pub monthly_payroll: u64,
}

/// Employees in hiring order
#[derive(Debug, Default)]
pub struct Staff {
    employees: RecordStore<Employee>,
}

impl Staff {
    /// # Errors
    /// If two employees share an id.
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        Ok(Self {
            employees: RecordStore::with_records(employees)?,
        })
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        self.employees.as_slice()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.get(&id.to_string())
    }

    /// Next `EMP-NNN` id after the highest numbered one
    fn next_id(&self) -> String {
        let highest = self
            .employees
            .iter()
            .filter_map(|e| e.id.strip_prefix("EMP-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("EMP-{:03}", highest + 1)
    }

    /// Append a new employee
    ///
    /// # Errors
    /// [`DashboardError::MissingField`] when the name is blank.
    pub fn add(&mut self, form: EmployeeForm) -> Result<String> {
        require("employee", "name", &form.name)?;
        let id = self.next_id();
        self.employees.insert(form.into_employee(id.clone()))?;
        info!(employee = %id, "employee added");
        Ok(id)
    }

    /// Overwrite an employee's details
    ///
    /// # Errors
    /// [`DashboardError::MissingField`] when the name is blank,
    /// [`DashboardError::NotFound`] for an unknown employee.
    pub fn edit(&mut self, id: &str, form: EmployeeForm) -> Result<()> {
        require("employee", "name", &form.name)?;
        if self.employees.replace(form.into_employee(id.to_string())) {
            Ok(())
        } else {
            Err(DashboardError::not_found("employee", id))
        }
    }

    /// Employees in `department`, or everyone for `None`
    #[must_use]
    pub fn in_department(&self, department: Option<Department>) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| department.map_or(true, |d| e.department == d))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> StaffStats {
        let active = || {
            self.employees
                .iter()
                .filter(|e| e.status == EmploymentStatus::Active)
        };
        StaffStats {
            total: self.employees.len(),
            active: active().count(),
            monthly_payroll: active().map(|e| e.salary).sum(),
        }
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<Employee> {
        &mut self.employees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use pretty_assertions::assert_eq;
    use sitedesk_test_utils::fixtures::date;

    fn staff() -> Staff {
        Staff::new(seed::employees().unwrap()).unwrap()
    }

    fn form(name: &str, salary: &str) -> EmployeeForm {
        EmployeeForm {
            name: name.into(),
            role: "Surveyor".into(),
            salary: salary.into(),
            ..EmployeeForm::new(date(15))
        }
    }

    #[test]
    fn seed_stats() {
        assert_eq!(
            staff().stats(),
            StaffStats {
                total: 5,
                active: 4,
                monthly_payroll: 450_000
            }
        );
    }

    #[test]
    fn add_numbers_sequentially() {
        let mut staff = staff();
        assert_eq!(staff.add(form("Neha Joshi", "55000")).unwrap(), "EMP-006");
        assert_eq!(staff.add(form("Arjun Das", "n/a")).unwrap(), "EMP-007");

        let arjun = staff.get("EMP-007").unwrap();
        assert_eq!(arjun.salary, 0);
        assert_eq!(arjun.hire_date, date(15));
        assert_eq!(arjun.photo_url, "https://picsum.photos/seed/EMP-007/100");
        assert_eq!(staff.employees().last().unwrap().id, "EMP-007");
        assert_eq!(staff.stats().monthly_payroll, 505_000);
    }

    #[test]
    fn edit_round_trips_the_form() {
        let mut staff = staff();
        let mut edited = EmployeeForm::from_employee(staff.get("EMP-003").unwrap());
        edited.status = EmploymentStatus::Active;
        edited.salary = "65000".into();
        staff.edit("EMP-003", edited).unwrap();

        let amit = staff.get("EMP-003").unwrap();
        assert_eq!(amit.salary, 65_000);
        assert_eq!(amit.photo_url, "https://picsum.photos/seed/3/100");
        assert_eq!(staff.stats().active, 5);
        assert!(staff.edit("EMP-099", form("Ghost", "1")).is_err());
    }

    #[test]
    fn department_filter() {
        let staff = staff();
        assert_eq!(staff.in_department(None).len(), 5);
        let sales = staff.in_department(Some(Department::Sales));
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].name, "Sunita Sharma");
    }
}
