//! Everyday technologies used as analogy material.
//!
//! The catalog is compiled into the binary and kept in a fixed order: the
//! prompt builder walks it front to back, so the order here is the order the
//! model sees.

/// One technology family the model may draw an analogy from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnologyCategory {
    /// Stable identifier (e.g. "smartphones").
    pub key: &'static str,
    /// Name shown to the user and embedded in prompts.
    pub display_name: &'static str,
    /// Sub-topics, most familiar first.
    pub facets: &'static [&'static str],
    pub description: &'static str,
}

pub static CATALOG: &[TechnologyCategory] = &[
    TechnologyCategory {
        key: "smartphones",
        display_name: "Smartphones",
        facets: &[
            "Système d'exploitation (iOS/Android)",
            "Applications mobiles",
            "Notifications et alertes",
            "Batterie et gestion d'énergie",
            "Capteurs (GPS, accéléromètre, gyroscope)",
            "Mémoire cache",
            "Synchronisation cloud",
            "Permissions d'accès",
            "Écran tactile et gestes",
            "Stockage local vs cloud",
        ],
        description: "Les smartphones sont omniprésents dans la vie des étudiants et chercheurs",
    },
    TechnologyCategory {
        key: "computers",
        display_name: "Ordinateurs (PC/Mac)",
        facets: &[
            "Processeur et CPU",
            "Mémoire RAM",
            "Disque dur/SSD",
            "Système d'exploitation",
            "Programmes et applications",
            "Multitâche et processus",
            "Fichiers et dossiers",
            "Réseau et connectivité",
            "Mise en cache",
            "Gestion des ressources",
        ],
        description: "Les ordinateurs sont les outils principaux de travail académique",
    },
    TechnologyCategory {
        key: "webBrowsers",
        display_name: "Navigateurs Web",
        facets: &[
            "Historique de navigation",
            "Cookies et données de session",
            "Cache du navigateur",
            "Onglets et fenêtres",
            "Favoris/Signets",
            "Barre de recherche",
            "Autocomplétion",
            "Plugins et extensions",
            "Mode incognito/privé",
            "Synchronisation entre appareils",
        ],
        description: "Les navigateurs web sont essentiels pour la recherche académique",
    },
    TechnologyCategory {
        key: "socialMedia",
        display_name: "Réseaux Sociaux",
        facets: &[
            "Fil d'actualité et algorithme de recommandation",
            "Notifications et engagement",
            "Profil utilisateur",
            "Partage et viralité",
            "Commentaires et interactions",
            "Hashtags et recherche",
            "Followers/Amis",
            "Stories et contenu éphémère",
            "Likes et réactions",
            "Modération de contenu",
        ],
        description: "Les réseaux sociaux influencent la communication académique",
    },
    TechnologyCategory {
        key: "bluetoothDevices",
        display_name: "Appareils Bluetooth",
        facets: &[
            "Appairage et connexion",
            "Portée de transmission",
            "Batterie et autonomie",
            "Synchronisation audio",
            "Interférence et signal",
            "Reconnexion automatique",
            "Qualité du signal",
            "Latence de transmission",
            "Codecs audio",
            "Gestion de la puissance",
        ],
        description: "Les écouteurs et appareils Bluetooth sont courants chez les étudiants",
    },
    TechnologyCategory {
        key: "cloudServices",
        display_name: "Services Cloud",
        facets: &[
            "Synchronisation de données",
            "Stockage distant",
            "Accès depuis n'importe où",
            "Sauvegarde automatique",
            "Partage de fichiers",
            "Collaboration en temps réel",
            "Authentification et sécurité",
            "Quota de stockage",
            "Versions et historique",
            "Chiffrement des données",
        ],
        description: "Le cloud est essentiel pour la collaboration académique",
    },
    TechnologyCategory {
        key: "emailSystems",
        display_name: "Systèmes Email",
        facets: &[
            "Boîte de réception et organisation",
            "Spam et filtres",
            "Pièces jointes",
            "Archivage et suppression",
            "Recherche et indexation",
            "Notifications",
            "Signatures et modèles",
            "Listes de diffusion",
            "Chiffrement des messages",
            "Récupération des messages supprimés",
        ],
        description: "L'email est le moyen de communication principal en milieu académique",
    },
    TechnologyCategory {
        key: "videoConferencing",
        display_name: "Vidéoconférence",
        facets: &[
            "Flux vidéo et audio",
            "Latence et délai",
            "Bande passante",
            "Partage d'écran",
            "Enregistrement de session",
            "Chat et messages",
            "Salles d'attente",
            "Permissions et contrôle",
            "Qualité adaptative",
            "Arrière-plans virtuels",
        ],
        description: "La vidéoconférence est cruciale pour l'enseignement à distance",
    },
];

/// Look up a category by key. Keys are case-sensitive.
pub fn find(key: &str) -> Option<&'static TechnologyCategory> {
    CATALOG.iter().find(|c| c.key == key)
}
