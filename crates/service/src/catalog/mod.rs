pub mod commission_types;
pub mod composition;
pub mod guarantees;
pub mod insurances;
pub mod loan_offers;
pub mod loan_types;

pub use commission_types::CommissionTypeService;
pub use guarantees::GuaranteeService;
pub use insurances::InsuranceService;
pub use loan_offers::LoanOfferService;
pub use loan_types::LoanTypeService;
