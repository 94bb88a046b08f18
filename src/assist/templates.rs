//! Built-in email and prompt templates.

use super::FollowUpContext;
use minijinja::Environment;

/// Shown when an email could not be drafted.
pub const FAILURE_MESSAGE: &str =
    "Desculpe, ocorreu um erro ao gerar o e-mail. Por favor, tente novamente.";

const FALLBACK_EMAIL: &str = "Olá {{ name }},

Espero que esteja bem!

Gostaria de saber se você teve a oportunidade de pensar sobre o {{ property_title }} que conversamos. O imóvel tem {{ bedrooms }} quartos e {{ bathrooms }} banheiros, com {{ area }}m² de área.

Estou à disposição para responder qualquer dúvida ou agendar uma nova visita, se desejar. Seria um prazer ajudá-lo a encontrar o imóvel ideal para você.

Aguardo seu retorno.

Atenciosamente,
Equipe RealtyFlow";

const WRITER_PROMPT: &str = "You are a friendly, professional real estate agent.
Write a short follow-up email in Brazilian Portuguese to a prospective client.

Client details:
- Name: {{ name }}
- Interested in: {{ property_title }} ({{ property_category }})
- Price: {{ price }}
- Stated needs: {{ client_needs }}
- Last contact: {{ last_contact }}

Greet the client by name, mention the property, offer help with questions or
another visit, and keep the tone warm but professional. Return only the email
body, without a subject line.";

pub(super) fn fallback_email(context: &FollowUpContext) -> Result<String, minijinja::Error> {
    render(FALLBACK_EMAIL, context)
}

pub(super) fn writer_prompt(context: &FollowUpContext) -> Result<String, minijinja::Error> {
    render(WRITER_PROMPT, context)
}

fn render(template: &str, context: &FollowUpContext) -> Result<String, minijinja::Error> {
    Environment::new().render_str(template, context)
}
