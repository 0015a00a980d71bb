use crate::content::icons::IconId;
use crate::i18n::Translator;

pub const BESPOKE_JOURNEYS_ID: &str = "bespoke-journeys";

const IMAGE_BASE: &str = "https://storage.googleapis.com/hostinger-horizons-assets-prod/7172a818-3ca1-4b7a-bdd1-3a691437a728";
const CDN_BASE: &str = "https://horizons-cdn.hostinger.com/7172a818-3ca1-4b7a-bdd1-3a691437a728";

#[derive(Clone, Debug, PartialEq)]
pub struct Benefit {
    pub name: String,
    pub benefit: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceDetails {
    pub breakdown: Vec<Benefit>,
    pub testimonials: Vec<Testimonial>,
}

/// A signature journey. Rebuilt from the translator whenever the locale changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub img_alt: String,
    pub details: ServiceDetails,
}

/// (id, locale key, image file)
const SIGNATURE: [(&str, &str, &str); 4] = [
    ("ultimate-escape", "seamless_arrival", "76ee2c11439ffe1abbf8ba43fa1b3e62.jpg"),
    ("business-engagements", "elite_business", "e5daee8c6186b49300a5001b534d74c9.jpg"),
    ("unforgettable-honeymoons", "honeymoons", "3826de06990c333803161a0a095e46d3.jpg"),
    (BESPOKE_JOURNEYS_ID, "bespoke_journeys", "54b861d8505c578d7b089b44670e12ef.jpg"),
];

fn build_offering(tr: &Translator, id: &'static str, key: &str, image: &str) -> ServiceOffering {
    let base = format!("services.{}", key);
    let breakdown_key = format!("{}.details.breakdown", base);
    let testimonials_key = format!("{}.details.testimonials", base);

    let breakdown = (0..tr.len(&breakdown_key))
        .map(|i| Benefit {
            name: tr.t(&format!("{}.{}.name", breakdown_key, i)),
            benefit: tr.t(&format!("{}.{}.benefit", breakdown_key, i)),
        })
        .collect();
    let testimonials = (0..tr.len(&testimonials_key))
        .map(|i| Testimonial {
            quote: tr.t(&format!("{}.{}.quote", testimonials_key, i)),
            author: tr.t(&format!("{}.{}.author", testimonials_key, i)),
        })
        .collect();

    ServiceOffering {
        id,
        title: tr.t(&format!("{}.title", base)),
        description: tr.t(&format!("{}.description", base)),
        img_src: format!("{}/{}", IMAGE_BASE, image),
        img_alt: tr.t(&format!("{}.imgAlt", base)),
        details: ServiceDetails { breakdown, testimonials },
    }
}

pub fn signature_services(tr: &Translator) -> Vec<ServiceOffering> {
    SIGNATURE
        .iter()
        .map(|(id, key, image)| build_offering(tr, id, key, image))
        .collect()
}

pub fn find_service(tr: &Translator, id: &str) -> Option<ServiceOffering> {
    SIGNATURE
        .iter()
        .find(|(candidate, _, _)| *candidate == id)
        .map(|(id, key, image)| build_offering(tr, id, key, image))
}

/// Placeholder for the booking form's free-text field, specific to the journey.
pub fn booking_placeholder_key(service_id: &str) -> &'static str {
    match service_id {
        "ultimate-escape" => "modals.flight_details",
        "business-engagements" => "modals.business_objectives",
        "unforgettable-honeymoons" => "modals.honeymoon_preferences",
        _ => "modals.specific_requests",
    }
}

/// One of the nine individually bookable concierge services.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailedService {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub img_src: String,
    pub img_alt: &'static str,
    pub icon: IconId,
}

const DETAILED: [(&str, IconId, &str, &str); 9] = [
    ("immigration", IconId::Plane, "76189161551772724f402d653200fe43.jpg", "VIP airport lounge with comfortable seating"),
    ("transportation", IconId::Car, "eb352776bbfc20f62d5c6e6faf976315.jpg", "Chauffeur opening a luxury car door"),
    ("security", IconId::UserShield, "e78b1127a7fe52733fcfc9ca4b33ee41.jpg", "Professional security personnel standing guard"),
    ("secretary", IconId::UserTie, "a086bcd759d2617786c43a8e370d6492.jpg", "Professional handshake between two business people"),
    ("dining", IconId::Utensils, "ab3719142aa047f87f5e6b1adaa7bf62.jpg", "Gourmet dish being served at a fine dining restaurant"),
    ("culture", IconId::Palette, "125d116ea1dfecaf8491fd33937b0027.jpg", "Exclusive art gallery viewing"),
    ("business", IconId::Briefcase, "0cd015c76efc8a27458b7b0339c2e365.jpg", "Modern city skyline at dusk"),
    ("medical", IconId::Stethoscope, "234f1fb2b10bbd8e878435eb589f0e66.jpg", "Private, modern hospital room"),
    ("gifting", IconId::Gift, "daacf2849a5b5db6a29bd871b0f0855d.jpg", "Customized luxury gift boxes"),
];

fn build_detailed(tr: &Translator, entry: &(&'static str, IconId, &'static str, &'static str)) -> DetailedService {
    let (id, icon, image, alt) = *entry;
    DetailedService {
        id,
        title: tr.t(&format!("detailed_services.{}.title", id)),
        description: tr.t(&format!("detailed_services.{}.description", id)),
        img_src: format!("{}/{}", CDN_BASE, image),
        img_alt: alt,
        icon,
    }
}

pub fn detailed_services(tr: &Translator) -> Vec<DetailedService> {
    DETAILED.iter().map(|entry| build_detailed(tr, entry)).collect()
}

pub fn find_detailed_service(tr: &Translator, id: &str) -> Option<DetailedService> {
    DETAILED
        .iter()
        .find(|(candidate, ..)| *candidate == id)
        .map(|entry| build_detailed(tr, entry))
}
