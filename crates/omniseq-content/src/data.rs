//! Static content tables for the brochure sections.
//!
//! Defined at build time and never mutated; rendering projects them into
//! markup in the order they appear here. Icon fields are trusted vector
//! fragments and flow through the raw placeholder.

use serde::Serialize;

/// One service offering, rendered 1:1 into a card.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub icon: &'static str,
}

/// One served industry.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryRecord {
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

/// Footer link columns and social icons.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub quick_links: &'static [QuickLink],
    pub service_links: &'static [QuickLink],
    pub socials: &'static [SocialLink],
}

const SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        slug: "vapt-testing",
        name: "VAPT Testing",
        description: "Comprehensive vulnerability assessment and penetration testing across networks, applications, and cloud infrastructure.",
        details: &[
            "Network Testing",
            "Web Application Testing",
            "Mobile Application Testing",
            "Cloud Infrastructure Testing",
            "Detailed Assessment Reports",
        ],
        icon: r#"<path d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"/>"#,
    },
    ServiceRecord {
        slug: "compliance-auditing",
        name: "Compliance and Auditing",
        description: "Expert audit services aligned with ISO 27001, SOC 2, PCI-DSS, and HIPAA standards.",
        details: &[
            "ISO 27001 Compliance",
            "SOC 2 Type II Audits",
            "PCI-DSS Validation",
            "HIPAA Assessment",
            "Compliance Documentation",
        ],
        icon: r#"<path d="M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-3 7h3m-3 4h3"/>"#,
    },
    ServiceRecord {
        slug: "security-operations",
        name: "Security Operations",
        description: "Proactive 24/7 threat monitoring, incident response, and managed security services.",
        details: &[
            "24/7 Threat Monitoring",
            "Incident Response Team",
            "Security Alert Management",
            "Vulnerability Assessment",
            "Threat Intelligence",
        ],
        icon: r#"<path d="M12 8v4m0 4v4M8 12h4m4 0h4"/>"#,
    },
    ServiceRecord {
        slug: "infrastructure-design",
        name: "Infrastructure Design",
        description: "Architecting secure, scalable networks with zero-trust security principles and modern cloud patterns.",
        details: &[
            "Zero-Trust Architecture",
            "Network Design",
            "Cloud Infrastructure",
            "Load Balancing",
            "Disaster Recovery Planning",
        ],
        icon: r#"<path d="M20 13V6a2 2 0 00-2-2H6a2 2 0 00-2 2v7m16 0v5a2 2 0 01-2 2H6a2 2 0 01-2-2v-5m16 0h-2.586a1 1 0 00-.707.293l-2.414 2.414a1 1 0 01-.707.293h-3.172a1 1 0 01-.707-.293l-2.414-2.414A1 1 0 006.586 13H4"/>"#,
    },
    ServiceRecord {
        slug: "cloud-enablement",
        name: "Cloud Enablement",
        description: "Seamless migration, security hardening, and optimization across AWS, GCP, Azure, and hybrid environments.",
        details: &[
            "AWS Security",
            "GCP Implementation",
            "Azure Configuration",
            "Hybrid Cloud Strategy",
            "Multi-Cloud Management",
        ],
        icon: r#"<path d="M7 16a4 4 0 01-.88-7.903A5 5 0 1115.9 6L16 6a5 5 0 011 9.9M15 13l-3-3m0 0l-3 3m3-3v12"/>"#,
    },
    ServiceRecord {
        slug: "managed-services",
        name: "Managed IT Services",
        description: "Comprehensive IT management including endpoint protection, patch management, and proactive maintenance.",
        details: &[
            "Patch Management",
            "Endpoint Protection",
            "System Monitoring",
            "Backup & Recovery",
            "Technical Support",
        ],
        icon: r#"<path d="M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065zM12 15a3 3 0 100-6 3 3 0 000 6z"/>"#,
    },
];

const INDUSTRIES: &[IndustryRecord] = &[
    IndustryRecord {
        name: "Banking & Finance",
        icon: r#"<g><path d="M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/></g>"#,
    },
    IndustryRecord {
        name: "Healthcare",
        icon: r#"<g><path d="M12 6v6m0 0v6m0-6h6m0 0h6M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z"/></g>"#,
    },
    IndustryRecord {
        name: "Enterprises",
        icon: r#"<g><path d="M19 21H5a2 2 0 01-2-2V5a2 2 0 012-2h11l5 5v11a2 2 0 01-2 2z"/><polyline points="17 21 17 13 7 13 7 21"/><polyline points="7 5 7 13 17 13 17 5"/></g>"#,
    },
    IndustryRecord {
        name: "Government",
        icon: r#"<g><path d="M12 2L2 7v10c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V7l-10-5z"/><path d="M12 12v4m-2-2h4"/></g>"#,
    },
];

const FOOTER: FooterData = FooterData {
    quick_links: &[
        QuickLink { name: "Home", url: "#home" },
        QuickLink { name: "Services", url: "#services" },
        QuickLink { name: "About", url: "#about" },
        QuickLink { name: "Contact", url: "#contact" },
    ],
    service_links: &[
        QuickLink { name: "VAPT Testing", url: "#services" },
        QuickLink { name: "Compliance & Auditing", url: "#services" },
        QuickLink { name: "Security Operations", url: "#services" },
        QuickLink { name: "Infrastructure Design", url: "#services" },
    ],
    socials: &[
        SocialLink {
            name: "LinkedIn",
            url: "https://linkedin.com/company/omniseq",
            icon: r#"<path d="M16 8a6 6 0 016 6v7h-4v-7a2 2 0 00-2-2 2 2 0 00-2 2v7h-4v-7a6 6 0 016-6zM2 9h4v12H2z"/><circle cx="4" cy="4" r="2"/>"#,
        },
        SocialLink {
            name: "Twitter",
            url: "https://twitter.com/omniseq",
            icon: r#"<path d="M23 3a10.9 10.9 0 01-3.14 1.53 4.48 4.48 0 00-7.86 3v1A10.66 10.66 0 013 4s-4 9 5 13a11.64 11.64 0 01-7 2s9 5 20 5a9.5 9.5 0 00-9-5.5c4.75 2.25 7-7 7-7"/>"#,
        },
        SocialLink {
            name: "GitHub",
            url: "https://github.com/omniseq",
            icon: r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 00-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0020 4.77 5.07 5.07 0 0020 4s-1.25-.75-4 .5c-.75-.25-2-.5-3.5-.5s-2.75.25-3.5.5c-2.75-1.25-4-.5-4-.5a5.07 5.07 0 000 .77 5.44 5.44 0 00-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 009 18.13V22"/>"#,
        },
        SocialLink {
            name: "Facebook",
            url: "https://facebook.com/omniseq",
            icon: r#"<path d="M18 2h-3a6 6 0 00-6 6v3H7v4h2v8h4v-8h3l1-4h-4V8a1 1 0 011-1h3z"/>"#,
        },
    ],
};

/// The service cards, in display order.
pub fn services() -> &'static [ServiceRecord] {
    SERVICES
}

/// The industry cards, in display order.
pub fn industries() -> &'static [IndustryRecord] {
    INDUSTRIES
}

/// The footer columns.
pub fn footer() -> &'static FooterData {
    &FOOTER
}
