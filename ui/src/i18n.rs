//! Bilingual UI strings (Québec French first, English second).
//!
//! The chosen language is the single piece of persisted client state,
//! stored under one localStorage key. Marketing copy lives here keyed by
//! dotted names; catalog entries carry their own name keys into this table.

use crate::compat;
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

const STORAGE_KEY: &str = "fresh-maison.lang";

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
}

impl Lang {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Fr => Self::En,
            Self::En => Self::Fr,
        }
    }

    /// The stored choice, if any; otherwise the site default.
    pub fn load(default_code: &str) -> Self {
        compat::storage_get(STORAGE_KEY)
            .and_then(|code| Self::from_str(&code).ok())
            .or_else(|| Self::from_str(default_code).ok())
            .unwrap_or_default()
    }

    pub fn store(self) {
        compat::storage_set(STORAGE_KEY, &self.to_string());
    }
}

fn pick(lang: Lang, fr: &'static str, en: &'static str) -> &'static str {
    match lang {
        Lang::Fr => fr,
        Lang::En => en,
    }
}

/// Looks up a UI string. Unknown keys come back verbatim so a missing
/// entry is visible in the page instead of panicking.
pub fn tr(lang: Lang, key: &'static str) -> &'static str {
    match key {
        // Navigation / chrome
        "nav.home" => pick(lang, "Accueil", "Home"),
        "nav.services" => pick(lang, "Services", "Services"),
        "nav.pricing" => pick(lang, "Tarifs", "Pricing"),
        "nav.booking" => pick(lang, "Réservation", "Book now"),
        "nav.contact" => pick(lang, "Contact", "Contact"),
        "nav.faq" => pick(lang, "FAQ", "FAQ"),
        "nav.about" => pick(lang, "À propos", "About"),
        "nav.admin" => pick(lang, "Admin", "Admin"),
        "footer.privacy" => pick(lang, "Confidentialité", "Privacy"),
        "footer.terms" => pick(lang, "Conditions", "Terms"),
        "footer.rights" => pick(lang, "Tous droits réservés.", "All rights reserved."),

        // Shared bits
        "common.continue" => pick(lang, "Continuer", "Continue"),
        "common.back" => pick(lang, "Retour", "Back"),
        "common.close" => pick(lang, "Fermer", "Close"),
        "common.send" => pick(lang, "Envoyer", "Send"),
        "common.popular" => pick(lang, "Populaire", "Popular"),
        "common.subtotal" => pick(lang, "Sous-total", "Subtotal"),
        "common.tax" => pick(lang, "Taxes (TPS + TVQ)", "Tax (GST + QST)"),
        "common.total" => pick(lang, "Total", "Total"),
        "loader.default" => pick(lang, "Chargement…", "Loading…"),

        // Home
        "home.title" => pick(lang, "Un chez-vous impeccable", "A spotless home"),
        "home.tagline" => pick(
            lang,
            "Ménage résidentiel et commercial à Montréal, par une équipe assurée et fiable.",
            "Residential and commercial cleaning in Montréal by an insured, reliable team.",
        ),
        "home.cta_book" => pick(lang, "Réserver un ménage", "Book a cleaning"),
        "home.cta_services" => pick(lang, "Voir nos services", "See our services"),
        "home.why_title" => pick(lang, "Pourquoi Fresh Maison ?", "Why Fresh Maison?"),
        "home.why_insured" => pick(
            lang,
            "Équipe assurée et vérifiée",
            "Insured and background-checked team",
        ),
        "home.why_eco" => pick(
            lang,
            "Produits écologiques inclus",
            "Eco-friendly products included",
        ),
        "home.why_satisfaction" => pick(
            lang,
            "Satisfaction garantie, reprise gratuite",
            "Satisfaction guaranteed, free redo",
        ),

        // Services
        "services.title" => pick(lang, "Nos services", "Our services"),
        "service.residential" => pick(lang, "Ménage régulier", "Regular cleaning"),
        "service.residential.duration" => pick(lang, "2 à 3 heures", "2 to 3 hours"),
        "service.deep" => pick(lang, "Grand ménage", "Deep cleaning"),
        "service.deep.duration" => pick(lang, "4 à 6 heures", "4 to 6 hours"),
        "service.commercial" => pick(lang, "Entretien commercial", "Commercial cleaning"),
        "service.commercial.duration" => pick(lang, "Selon la surface", "Depends on the area"),
        "service.feature.dusting" => pick(lang, "Époussetage complet", "Full dusting"),
        "service.feature.floors" => pick(lang, "Planchers lavés", "Floors washed"),
        "service.feature.kitchen" => pick(lang, "Cuisine nettoyée", "Kitchen cleaned"),
        "service.feature.bathrooms" => pick(lang, "Salles de bain désinfectées", "Bathrooms disinfected"),
        "service.feature.everything_residential" => pick(
            lang,
            "Tout le ménage régulier",
            "Everything in the regular cleaning",
        ),
        "service.feature.baseboards" => pick(lang, "Plinthes et cadrages", "Baseboards and trim"),
        "service.feature.appliance_exteriors" => pick(
            lang,
            "Extérieur des électroménagers",
            "Appliance exteriors",
        ),
        "service.feature.light_fixtures" => pick(lang, "Luminaires", "Light fixtures"),
        "service.feature.offices" => pick(lang, "Bureaux et postes de travail", "Offices and workstations"),
        "service.feature.common_areas" => pick(lang, "Aires communes", "Common areas"),
        "service.feature.washrooms" => pick(lang, "Salles d'eau", "Washrooms"),
        "service.feature.after_hours" => pick(lang, "Service après les heures", "After-hours service"),

        // Addons
        "addon.windows" => pick(lang, "Vitres intérieures", "Interior windows"),
        "addon.fridge" => pick(lang, "Intérieur du frigo", "Inside the fridge"),
        "addon.oven" => pick(lang, "Intérieur du four", "Inside the oven"),
        "addon.cabinets" => pick(lang, "Intérieur des armoires", "Inside cabinets"),
        "addon.laundry" => pick(lang, "Lessive pliée", "Folded laundry"),
        "addon.balcony" => pick(lang, "Balcon", "Balcony"),

        // Frequencies / property types
        "frequency.one_time" => pick(lang, "Une fois", "One time"),
        "frequency.weekly" => pick(lang, "Chaque semaine", "Weekly"),
        "frequency.bi_weekly" => pick(lang, "Aux deux semaines", "Every two weeks"),
        "frequency.monthly" => pick(lang, "Chaque mois", "Monthly"),
        "property.apartment" => pick(lang, "Appartement", "Apartment"),
        "property.house" => pick(lang, "Maison", "House"),
        "property.townhouse" => pick(lang, "Maison de ville", "Townhouse"),
        "property.office" => pick(lang, "Bureau", "Office"),
        "property.retail" => pick(lang, "Commerce", "Retail"),

        // Pricing page
        "pricing.title" => pick(lang, "Tarifs", "Pricing"),
        "pricing.base_price" => pick(lang, "Prix de base", "Base price"),
        "pricing.addons_title" => pick(lang, "Extras", "Add-ons"),
        "pricing.discounts_title" => pick(lang, "Rabais de fréquence", "Frequency discounts"),
        "pricing.tax_note" => pick(
            lang,
            "Taxes de 14,975 % (TPS + TVQ) en sus, calculées sur le sous-total arrondi.",
            "14.975% tax (GST + QST) applies, computed on the rounded subtotal.",
        ),

        // Wizard
        "wizard.title" => pick(lang, "Réserver votre ménage", "Book your cleaning"),
        "wizard.step.service" => pick(lang, "Service", "Service"),
        "wizard.step.property" => pick(lang, "Propriété", "Property"),
        "wizard.step.schedule" => pick(lang, "Horaire", "Schedule"),
        "wizard.step.contact" => pick(lang, "Coordonnées", "Contact"),
        "wizard.step.review" => pick(lang, "Confirmation", "Review"),
        "wizard.choose_service" => pick(lang, "Choisissez un service", "Choose a service"),
        "wizard.property_type" => pick(lang, "Type de propriété", "Property type"),
        "wizard.size" => pick(lang, "Superficie (pi²)", "Size (sq ft)"),
        "wizard.bedrooms" => pick(lang, "Chambres", "Bedrooms"),
        "wizard.bathrooms" => pick(lang, "Salles de bain", "Bathrooms"),
        "wizard.instructions" => pick(lang, "Instructions particulières", "Special instructions"),
        "wizard.addons" => pick(lang, "Extras", "Add-ons"),
        "wizard.date" => pick(lang, "Date", "Date"),
        "wizard.time" => pick(lang, "Heure d'arrivée", "Arrival time"),
        "wizard.frequency" => pick(lang, "Fréquence", "Frequency"),
        "wizard.first_name" => pick(lang, "Prénom", "First name"),
        "wizard.last_name" => pick(lang, "Nom", "Last name"),
        "wizard.email" => pick(lang, "Courriel", "Email"),
        "wizard.phone" => pick(lang, "Téléphone", "Phone"),
        "wizard.address" => pick(lang, "Adresse", "Address"),
        "wizard.email_updates" => pick(
            lang,
            "Recevoir les rappels par courriel",
            "Receive email reminders",
        ),
        "wizard.sms_updates" => pick(lang, "Recevoir les rappels par texto", "Receive SMS reminders"),
        "wizard.review_title" => pick(lang, "Vérifiez votre demande", "Review your request"),
        "wizard.confirm" => pick(lang, "Confirmer la réservation", "Confirm booking"),
        "wizard.submitting" => pick(lang, "Envoi en cours…", "Submitting…"),
        "wizard.success_title" => pick(lang, "Demande reçue !", "Request received!"),
        "wizard.success_body" => pick(
            lang,
            "Merci ! Nous vous contacterons sous peu pour confirmer votre rendez-vous. Retour à l'accueil…",
            "Thank you! We will contact you shortly to confirm your appointment. Returning home…",
        ),
        "wizard.error_title" => pick(lang, "Une erreur est survenue", "Something went wrong"),
        "wizard.error_body" => pick(
            lang,
            "Votre demande n'a pas pu être envoyée. Veuillez réessayer.",
            "Your request could not be sent. Please try again.",
        ),

        // Contact page
        "contact.title" => pick(lang, "Écrivez-nous", "Get in touch"),
        "contact.name" => pick(lang, "Nom", "Name"),
        "contact.subject" => pick(lang, "Sujet", "Subject"),
        "contact.message" => pick(lang, "Message", "Message"),
        "contact.success" => pick(
            lang,
            "Message envoyé. Nous répondons en un jour ouvrable.",
            "Message sent. We reply within one business day.",
        ),

        // FAQ
        "faq.title" => pick(lang, "Questions fréquentes", "Frequently asked questions"),
        "faq.q_products" => pick(
            lang,
            "Fournissez-vous les produits ?",
            "Do you bring the supplies?",
        ),
        "faq.a_products" => pick(
            lang,
            "Oui, l'équipe arrive avec tous les produits et l'équipement, écologiques par défaut.",
            "Yes, the team arrives with all products and equipment, eco-friendly by default.",
        ),
        "faq.q_presence" => pick(
            lang,
            "Dois-je être présent pendant le ménage ?",
            "Do I need to be home during the cleaning?",
        ),
        "faq.a_presence" => pick(
            lang,
            "Non. Plusieurs clients nous laissent un accès; dites-le simplement dans les instructions.",
            "No. Many clients arrange access for us; just say so in the special instructions.",
        ),
        "faq.q_confirm" => pick(
            lang,
            "Ma réservation est-elle confirmée immédiatement ?",
            "Is my booking confirmed right away?",
        ),
        "faq.a_confirm" => pick(
            lang,
            "La demande est reçue immédiatement et un membre de l'équipe confirme l'heure par téléphone ou courriel.",
            "The request is received immediately and a team member confirms the time by phone or email.",
        ),
        "faq.q_cancel" => pick(
            lang,
            "Puis-je annuler ou déplacer un rendez-vous ?",
            "Can I cancel or move an appointment?",
        ),
        "faq.a_cancel" => pick(
            lang,
            "Oui, sans frais jusqu'à 24 heures avant l'heure prévue.",
            "Yes, free of charge up to 24 hours before the scheduled time.",
        ),
        "faq.q_payment" => pick(
            lang,
            "Comment se fait le paiement ?",
            "How does payment work?",
        ),
        "faq.a_payment" => pick(
            lang,
            "Aucun paiement en ligne : vous payez après le service, par virement ou carte.",
            "No online payment: you pay after the service, by transfer or card.",
        ),

        // About / legal
        "about.title" => pick(lang, "À propos de Fresh Maison", "About Fresh Maison"),
        "about.body" => pick(
            lang,
            "Fresh Maison est une entreprise familiale montréalaise fondée en 2018. Une même équipe attitrée, des produits écologiques et une garantie de satisfaction sur chaque visite.",
            "Fresh Maison is a family-run Montréal company founded in 2018. The same assigned team, eco-friendly products and a satisfaction guarantee on every visit.",
        ),
        "privacy.title" => pick(lang, "Politique de confidentialité", "Privacy policy"),
        "privacy.body" => pick(
            lang,
            "Les renseignements soumis via nos formulaires servent uniquement à planifier votre service et à vous joindre. Ils ne sont jamais vendus ni partagés à des fins publicitaires.",
            "Information submitted through our forms is used only to schedule your service and reach you. It is never sold or shared for advertising.",
        ),
        "terms.title" => pick(lang, "Conditions d'utilisation", "Terms of service"),
        "terms.body" => pick(
            lang,
            "Les prix affichés sont des estimations avant taxes applicables au Québec. Toute réservation est confirmée manuellement par notre équipe avant d'être finale.",
            "Displayed prices are pre-tax estimates applicable in Québec. Every booking is confirmed manually by our team before it is final.",
        ),

        // Login / admin
        "login.title" => pick(lang, "Espace administrateur", "Admin area"),
        "login.password" => pick(lang, "Mot de passe", "Password"),
        "login.submit" => pick(lang, "Se connecter", "Sign in"),
        "login.failed" => pick(
            lang,
            "Mot de passe refusé.",
            "Password rejected.",
        ),
        "login.logout" => pick(lang, "Se déconnecter", "Sign out"),
        "admin.title" => pick(lang, "Tableau de bord", "Dashboard"),
        "admin.bookings" => pick(lang, "Réservations", "Bookings"),
        "admin.messages" => pick(lang, "Messages", "Messages"),
        "admin.refresh" => pick(lang, "Rafraîchir", "Refresh"),
        "admin.empty" => pick(lang, "Aucune entrée.", "Nothing here yet."),
        "admin.load_failed" => pick(
            lang,
            "Impossible de charger les données :",
            "Could not load the data:",
        ),
        "admin.status" => pick(lang, "Statut", "Status"),

        // 404
        "notfound.title" => pick(lang, "Page introuvable", "Page not found"),
        "notfound.body" => pick(
            lang,
            "Cette page n'existe pas ou a été déplacée.",
            "This page does not exist or has moved.",
        ),
        "notfound.home" => pick(lang, "Retour à l'accueil", "Back to home"),

        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_round_trips_through_its_storage_form() {
        assert_eq!(Lang::Fr.to_string(), "fr");
        assert_eq!(Lang::from_str("en").ok(), Some(Lang::En));
        assert!(Lang::from_str("de").is_err());
        assert_eq!(Lang::En.other(), Lang::Fr);
    }

    #[test]
    fn default_language_is_french() {
        // No storage on native, and an unknown default code falls back too.
        assert_eq!(Lang::load("fr"), Lang::Fr);
        assert_eq!(Lang::load("en"), Lang::En);
        assert_eq!(Lang::load("xx"), Lang::Fr);
    }

    #[test]
    fn every_catalog_key_resolves_in_both_languages() {
        for service in api::catalog::services() {
            for lang in [Lang::Fr, Lang::En] {
                assert_ne!(tr(lang, service.name_key), service.name_key);
                assert_ne!(tr(lang, service.duration_key), service.duration_key);
                for feature in service.feature_keys {
                    assert_ne!(tr(lang, feature), *feature);
                }
            }
        }
        for addon in api::catalog::addons() {
            assert_ne!(tr(Lang::Fr, addon.name_key), addon.name_key);
        }
    }

    #[test]
    fn unknown_keys_come_back_verbatim() {
        assert_eq!(tr(Lang::Fr, "no.such.key"), "no.such.key");
    }
}
