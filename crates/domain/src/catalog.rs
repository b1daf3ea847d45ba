//! Built-in seed catalog — the simulated household.
//!
//! Six rooms plus the whole-house pseudo-room, and 23 devices with their
//! wattages, tips, and cost metadata. The catalog is seeded once at
//! startup; devices are never created or destroyed at runtime.

use crate::device::{Category, Device};
use crate::error::WattwiseError;
use crate::room::{GLOBAL_ROOM, Room};
use crate::status::PowerStatus;

/// Id of the always-on central lighting pseudo-device. Bulk status
/// updates leave this row untouched.
pub const GLOBAL_LIGHTS: &str = "global-lights";

/// The room list, in display order.
///
/// # Errors
///
/// Returns a validation error if a room slug is malformed; the catalog
/// is covered by tests, so this only fires after a bad edit.
pub fn rooms() -> Result<Vec<Room>, WattwiseError> {
    Ok(vec![
        Room::new("bathroom", "Badezimmer")?,
        Room::new("bedroom", "Schlafzimmer")?,
        Room::new("living", "Wohnzimmer")?,
        Room::new("kitchen", "Küche")?,
        Room::new("garage", "Garage")?,
        Room::new("basement", "Keller")?,
        Room::new(GLOBAL_ROOM, "Ganzes Haus")?,
    ])
}

/// The device list, grouped by room in display order.
///
/// # Errors
///
/// Returns a validation error if an entry violates device invariants;
/// the catalog is covered by tests, so this only fires after a bad edit.
#[allow(clippy::too_many_lines)]
pub fn devices() -> Result<Vec<Device>, WattwiseError> {
    Ok(vec![
        // Badezimmer
        Device::builder()
            .id("bathroom-hairdryer")?
            .name("Haartrockner")
            .room("bathroom")?
            .category(Category::PersonalCare)
            .wattage(1800)
            .cost_per_hour(0.54)
            .efficiency_rating("C")
            .tip("Nutzen Sie den Haartrockner nur bei Bedarf")
            .tip("Verwenden Sie die niedrigste Temperaturstufe")
            .tip("Trocknen Sie Ihre Haare vorher mit einem Handtuch")
            .description("Haartrockner verbrauchen viel Energie während des Betriebs.")
            .build()?,
        Device::builder()
            .id("bathroom-shower")?
            .name("Dusche/Bad")
            .room("bathroom")?
            .category(Category::Heating)
            .wattage(3000)
            .cost_per_hour(0.90)
            .efficiency_rating("D")
            .tip("Kürzen Sie die Duschzeit")
            .tip("Nutzen Sie eine wassersparende Duschbrause")
            .tip("Duschen Sie bei niedrigerer Temperatur")
            .description("Warmwasser für Dusche und Bad verbraucht viel Energie.")
            .build()?,
        Device::builder()
            .id("bathroom-ventilation")?
            .name("Badlüfter")
            .room("bathroom")?
            .category(Category::Ventilation)
            .wattage(25)
            .cost_per_hour(0.008)
            .efficiency_rating("A")
            .tip("Schalten Sie den Ventilator nach dem Duschen ein")
            .tip("Lassen Sie ihn nur 15-30 Minuten laufen")
            .tip("Reinigen Sie die Filter regelmäßig")
            .description("Badezimmerventilator für Luftzirkulation.")
            .build()?,
        // Schlafzimmer
        Device::builder()
            .id("bedroom-fan")?
            .name("Ventilator")
            .room("bedroom")?
            .category(Category::Comfort)
            .wattage(45)
            .cost_per_hour(0.014)
            .efficiency_rating("A")
            .tip("Nutzen Sie den Ventilator statt der Klimaanlage")
            .tip("Stellen Sie eine niedrige Geschwindigkeit ein")
            .tip("Schalten Sie ihn aus, wenn Sie den Raum verlassen")
            .description("Deckenventilator für Luftzirkulation im Schlafzimmer.")
            .build()?,
        Device::builder()
            .id("bedroom-humidifier")?
            .name("Luftbefeuchter")
            .room("bedroom")?
            .category(Category::Comfort)
            .wattage(30)
            .cost_per_hour(0.009)
            .efficiency_rating("A")
            .tip("Verwenden Sie destilliertes Wasser")
            .tip("Reinigen Sie das Gerät regelmäßig")
            .tip("Stellen Sie die optimale Luftfeuchtigkeit ein (40-60%)")
            .description("Luftbefeuchter für bessere Luftqualität.")
            .build()?,
        Device::builder()
            .id("bedroom-smartphone")?
            .name("Smartphone")
            .room("bedroom")?
            .category(Category::Electronics)
            .wattage(5)
            .cost_per_hour(0.002)
            .efficiency_rating("A+")
            .tip("Laden Sie das Smartphone nur bei Bedarf")
            .tip("Nutzen Sie den Energiesparmodus")
            .tip("Ziehen Sie das Ladekabel nach dem Laden ab")
            .description("Smartphone-Ladegerät.")
            .build()?,
        Device::builder()
            .id("bedroom-pc")?
            .name("PC")
            .room("bedroom")?
            .category(Category::Electronics)
            .wattage(200)
            .standby_wattage(10)
            .cost_per_hour(0.060)
            .efficiency_rating("B")
            .tip("Nutzen Sie den Energiesparmodus")
            .tip("Schalten Sie den PC komplett aus")
            .tip("Verwenden Sie eine schaltbare Steckdosenleiste")
            .description("Desktop-Computer im Schlafzimmer.")
            .build()?,
        // Wohnzimmer
        Device::builder()
            .id("living-tv")?
            .name("Fernseher")
            .room("living")?
            .category(Category::Entertainment)
            .wattage(120)
            .standby_wattage(2)
            .cost_per_hour(0.036)
            .efficiency_rating("A")
            .tip("Schalten Sie den Fernseher komplett aus")
            .tip("Nutzen Sie den Energiesparmodus")
            .tip("Reduzieren Sie die Helligkeit")
            .description("LED-Fernseher für Entertainment.")
            .build()?,
        Device::builder()
            .id("living-soundbar")?
            .name("Soundanlage")
            .room("living")?
            .category(Category::Entertainment)
            .wattage(50)
            .cost_per_hour(0.015)
            .efficiency_rating("A")
            .tip("Schalten Sie die Soundanlage nur bei Bedarf ein")
            .tip("Nutzen Sie Bluetooth statt ständiger Verbindung")
            .tip("Reduzieren Sie die Lautstärke")
            .description("Soundbar für bessere Audioqualität.")
            .build()?,
        Device::builder()
            .id("living-console")?
            .name("Videokonsole")
            .room("living")?
            .category(Category::Entertainment)
            .wattage(150)
            .cost_per_hour(0.045)
            .efficiency_rating("B")
            .tip("Schalten Sie die Konsole nach dem Spielen aus")
            .tip("Nutzen Sie den Energiesparmodus")
            .tip("Laden Sie Controller nur bei Bedarf")
            .description("Spielkonsole für Gaming.")
            .build()?,
        Device::builder()
            .id("living-router")?
            .name("WLAN-Router")
            .room("living")?
            .category(Category::Network)
            .wattage(12)
            .standby_wattage(0)
            .status(PowerStatus::Standby)
            .cost_per_hour(0.004)
            .efficiency_rating("A+")
            .tip("Platzieren Sie den Router zentral")
            .tip("Aktualisieren Sie die Firmware regelmäßig")
            .tip("Schalten Sie WLAN nachts aus")
            .description("WLAN-Router für Internetverbindung.")
            .build()?,
        // Küche
        Device::builder()
            .id("kitchen-microwave")?
            .name("Mikrowelle")
            .room("kitchen")?
            .category(Category::Cooking)
            .wattage(800)
            .cost_per_hour(0.24)
            .efficiency_rating("B")
            .tip("Nutzen Sie die Mikrowelle für kleine Portionen")
            .tip("Verwenden Sie mikrowellengeeignete Behälter")
            .tip("Decken Sie Speisen ab")
            .description("Mikrowelle zum Erwärmen von Speisen.")
            .build()?,
        Device::builder()
            .id("kitchen-fridge")?
            .name("Kühlschrank")
            .room("kitchen")?
            .category(Category::Cooling)
            .wattage(150)
            .status(PowerStatus::On)
            .cost_per_hour(0.045)
            .efficiency_rating("A+")
            .tip("Stellen Sie die optimale Temperatur ein (7°C)")
            .tip("Öffnen Sie die Tür nur kurz")
            .tip("Lassen Sie warme Speisen abkühlen")
            .description("Kühlschrank zur Lebensmittelaufbewahrung.")
            .build()?,
        Device::builder()
            .id("kitchen-oven")?
            .name("Herd/Ofen")
            .room("kitchen")?
            .category(Category::Cooking)
            .wattage(2500)
            .cost_per_hour(0.75)
            .efficiency_rating("A")
            .tip("Nutzen Sie die Restwärme")
            .tip("Verwenden Sie passende Topfgrößen")
            .tip("Heizen Sie nicht vor, wenn möglich")
            .description("Elektrischer Herd mit Backofen.")
            .build()?,
        Device::builder()
            .id("kitchen-dishwasher")?
            .name("Spülmaschine")
            .room("kitchen")?
            .category(Category::Cleaning)
            .wattage(1200)
            .cost_per_hour(0.36)
            .efficiency_rating("A+")
            .tip("Nutzen Sie das Eco-Programm")
            .tip("Beladen Sie die Maschine voll")
            .tip("Verzichten Sie auf Vorspülen")
            .description("Geschirrspüler für automatische Reinigung.")
            .build()?,
        // Garage
        Device::builder()
            .id("garage-ebike")?
            .name("E-Bike")
            .room("garage")?
            .category(Category::Mobility)
            .wattage(200)
            .cost_per_hour(0.06)
            .efficiency_rating("A")
            .tip("Laden Sie das E-Bike nur bei Bedarf")
            .tip("Bewahren Sie den Akku bei Raumtemperatur auf")
            .tip("Nutzen Sie das E-Bike statt des Autos")
            .description("Elektrofahrrad-Ladestation.")
            .build()?,
        Device::builder()
            .id("garage-scooter")?
            .name("E-Scooter")
            .room("garage")?
            .category(Category::Mobility)
            .wattage(100)
            .cost_per_hour(0.03)
            .efficiency_rating("A")
            .tip("Laden Sie den E-Scooter vollständig auf")
            .tip("Vermeiden Sie Überladung")
            .tip("Nutzen Sie ihn für kurze Strecken")
            .description("Elektro-Scooter für kurze Strecken.")
            .build()?,
        Device::builder()
            .id("garage-car")?
            .name("E-Auto")
            .room("garage")?
            .category(Category::Mobility)
            .wattage(7000)
            .cost_per_hour(2.10)
            .efficiency_rating("A+")
            .tip("Laden Sie über Nacht mit günstigen Tarifen")
            .tip("Nutzen Sie Solarstrom zum Laden")
            .tip("Planen Sie Ihre Fahrten effizient")
            .description("Elektroauto-Ladestation.")
            .build()?,
        // Keller
        Device::builder()
            .id("basement-washer")?
            .name("Waschmaschine")
            .room("basement")?
            .category(Category::Cleaning)
            .wattage(2000)
            .cost_per_hour(0.60)
            .efficiency_rating("A")
            .tip("Nutzen Sie das Eco-Programm")
            .tip("Waschen Sie bei niedrigeren Temperaturen")
            .tip("Beladen Sie die Maschine voll")
            .description("Waschmaschine für Kleidung.")
            .build()?,
        Device::builder()
            .id("basement-dryer")?
            .name("Tumbler")
            .room("basement")?
            .category(Category::Cleaning)
            .wattage(2500)
            .cost_per_hour(0.75)
            .efficiency_rating("A")
            .tip("Nutzen Sie den Wäschetrockner sparsam")
            .tip("Reinigen Sie das Flusensieb regelmäßig")
            .tip("Trocknen Sie Wäsche an der Luft, wenn möglich")
            .description("Wäschetrockner für schnelle Trocknung.")
            .build()?,
        Device::builder()
            .id("basement-boiler")?
            .name("Boiler")
            .room("basement")?
            .category(Category::Heating)
            .wattage(3000)
            .status(PowerStatus::On)
            .cost_per_hour(0.90)
            .efficiency_rating("B")
            .tip("Stellen Sie die Temperatur auf 60°C")
            .tip("Isolieren Sie die Warmwasserleitungen")
            .tip("Entkalken Sie den Boiler regelmäßig")
            .description("Warmwasserboiler für Heizung.")
            .build()?,
        Device::builder()
            .id("basement-freezer")?
            .name("Gefrierschrank")
            .room("basement")?
            .category(Category::Cooling)
            .wattage(200)
            .cost_per_hour(0.06)
            .efficiency_rating("A+")
            .tip("Stellen Sie die Temperatur auf -18°C")
            .tip("Tauen Sie das Gerät regelmäßig ab")
            .tip("Halten Sie das Gerät voll für bessere Effizienz")
            .description("Gefrierschrank für Tiefkühlkost.")
            .build()?,
        // Ganzes Haus
        Device::builder()
            .id(GLOBAL_LIGHTS)?
            .name("Hausbeleuchtung")
            .room(GLOBAL_ROOM)?
            .category(Category::Lighting)
            .wattage(300)
            .cost_per_hour(0.09)
            .efficiency_rating("A+")
            .tip("Nutzen Sie LED-Leuchtmittel")
            .tip("Schalten Sie Licht in leeren Räumen aus")
            .tip("Nutzen Sie Tageslicht, wann immer möglich")
            .description("Zentrale Lichtsteuerung für das ganze Haus.")
            .build()?,
    ])
}
