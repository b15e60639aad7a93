use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketing activity the requester needs.
///
/// The serialized form is the human-readable label shown on the form, and it
/// is the exact text stored in the `activity` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "Google Ads")]
    GoogleAds,
    #[serde(rename = "Social Media Campaign")]
    SocialMediaCampaign,
    #[serde(rename = "SEO")]
    Seo,
    #[serde(rename = "Email Newsletter")]
    EmailNewsletter,
    #[serde(rename = "In-store Event")]
    InStoreEvent,
    #[serde(rename = "Website Update")]
    WebsiteUpdate,
    #[serde(rename = "Influencer Collaboration")]
    InfluencerCollaboration,
    #[serde(rename = "SMS Campaign")]
    SmsCampaign,
    #[serde(rename = "OOH/Billboard")]
    OohBillboard,
    #[serde(rename = "Print Flyers")]
    PrintFlyers,
}

impl Activity {
    /// Every activity, in the order the form lists them.
    pub const ALL: [Activity; 10] = [
        Activity::GoogleAds,
        Activity::SocialMediaCampaign,
        Activity::Seo,
        Activity::EmailNewsletter,
        Activity::InStoreEvent,
        Activity::WebsiteUpdate,
        Activity::InfluencerCollaboration,
        Activity::SmsCampaign,
        Activity::OohBillboard,
        Activity::PrintFlyers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Activity::GoogleAds => "Google Ads",
            Activity::SocialMediaCampaign => "Social Media Campaign",
            Activity::Seo => "SEO",
            Activity::EmailNewsletter => "Email Newsletter",
            Activity::InStoreEvent => "In-store Event",
            Activity::WebsiteUpdate => "Website Update",
            Activity::InfluencerCollaboration => "Influencer Collaboration",
            Activity::SmsCampaign => "SMS Campaign",
            Activity::OohBillboard => "OOH/Billboard",
            Activity::PrintFlyers => "Print Flyers",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Activity;

    #[test]
    fn serde_uses_form_labels() {
        for activity in Activity::ALL {
            let json = serde_json::to_string(&activity).unwrap();
            assert_eq!(json, format!("\"{}\"", activity.label()));
            let back: Activity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, activity);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(serde_json::from_str::<Activity>(r#""Radio Spot""#).is_err());
    }
}
