//! Kiosk eligibility and catalog-consistency diagnostics.

use agrikiosk_applications::{Application, KioskRef};
use agrikiosk_catalog::{Product, ProductCatalog, ProductId};
use agrikiosk_core::EntityId;

use crate::kiosk::Kiosk;

/// Active products this kiosk may offer: the kiosk's type must appear in
/// the product's `kioskTypes`.
pub fn eligible_products<'a>(kiosk: &Kiosk, catalog: &'a ProductCatalog) -> Vec<&'a Product> {
    catalog
        .list()
        .filter(|p| p.kiosk_types.contains(&kiosk.kiosk_type))
        .collect()
}

/// Applications this kiosk may run.
///
/// `availableKiosks` holds kiosk ids and kiosk-type tags interchangeably in
/// observed data, so this is a dual-key lookup: a ref matches on either the
/// kiosk's id or its type. An empty ref set matches nothing.
pub fn eligible_applications<'a>(
    kiosk: &Kiosk,
    applications: &'a [Application],
) -> Vec<&'a Application> {
    applications
        .iter()
        .filter(|app| {
            app.available_kiosks.iter().any(|r| match r {
                KioskRef::Id(id) => id == kiosk.id.entity_id(),
                KioskRef::Type(t) => *t == kiosk.kiosk_type,
            })
        })
        .collect()
}

/// Why a stocked product reference is dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrphanReason {
    Missing,
    Inactive,
}

/// A kiosk stocking a product it should not serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskOrphan {
    pub kiosk_id: EntityId,
    pub product_id: ProductId,
    pub reason: OrphanReason,
}

/// An application referencing a kiosk id that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationOrphan {
    pub application_id: EntityId,
    pub kiosk_id: EntityId,
}

/// Diagnostic findings. Warnings only, never auto-corrected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrphanReport {
    pub kiosk_orphans: Vec<KioskOrphan>,
    pub application_orphans: Vec<ApplicationOrphan>,
}

impl OrphanReport {
    pub fn is_clean(&self) -> bool {
        self.kiosk_orphans.is_empty() && self.application_orphans.is_empty()
    }
}

/// Scan for dangling references: kiosks stocking inactive or nonexistent
/// products, and applications naming nonexistent kiosk ids. Type-tag refs
/// are not checked here; they cannot dangle.
pub fn find_orphans(
    kiosks: &[Kiosk],
    catalog: &ProductCatalog,
    applications: &[Application],
) -> OrphanReport {
    let mut report = OrphanReport::default();

    for kiosk in kiosks {
        for product_id in &kiosk.available_products {
            let reason = match catalog.get_by_id(product_id) {
                None => OrphanReason::Missing,
                Some(p) if !p.is_active => OrphanReason::Inactive,
                Some(_) => continue,
            };
            tracing::warn!(
                kiosk = %kiosk.id,
                product = %product_id,
                ?reason,
                "kiosk stocks an unservable product"
            );
            report.kiosk_orphans.push(KioskOrphan {
                kiosk_id: kiosk.id.entity_id().clone(),
                product_id: product_id.clone(),
                reason,
            });
        }
    }

    for app in applications {
        for r in &app.available_kiosks {
            let KioskRef::Id(kiosk_id) = r else { continue };
            if kiosks.iter().any(|k| k.id.entity_id() == kiosk_id) {
                continue;
            }
            tracing::warn!(
                application = %app.id,
                kiosk = %kiosk_id,
                "application references a nonexistent kiosk"
            );
            report.application_orphans.push(ApplicationOrphan {
                application_id: app.id.entity_id().clone(),
                kiosk_id: kiosk_id.clone(),
            });
        }
    }

    report
}

/// One-time migration to the canonical ref form: rewrite id-valued refs to
/// the referenced kiosk's type tag (deduplicated by the set). Ids that do
/// not resolve to a known kiosk are left in place and returned for review.
pub fn migrate_kiosk_refs(application: &mut Application, kiosks: &[Kiosk]) -> Vec<EntityId> {
    let mut unresolved = Vec::new();
    let refs = std::mem::take(&mut application.available_kiosks);

    for r in refs {
        match r {
            KioskRef::Type(_) => {
                application.available_kiosks.insert(r);
            }
            KioskRef::Id(id) => {
                match kiosks.iter().find(|k| k.id.entity_id() == &id) {
                    Some(kiosk) => {
                        application
                            .available_kiosks
                            .insert(KioskRef::Type(kiosk.kiosk_type));
                    }
                    None => {
                        unresolved.push(id.clone());
                        application.available_kiosks.insert(KioskRef::Id(id));
                    }
                }
            }
        }
    }

    unresolved
}
