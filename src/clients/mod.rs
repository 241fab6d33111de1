pub mod crm;
pub mod odoo;
