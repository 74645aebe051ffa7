use folio_core_contact_impl::ContactServiceImpl;
use folio_core_health_impl::HealthServiceImpl;
use folio_email_impl::EmailServiceImpl;

pub type Email = EmailServiceImpl;
pub type Contact = ContactServiceImpl<Email>;
pub type Health = HealthServiceImpl;

pub type RestServer = folio_api_rest::RestServer<Health, Contact>;
