//! Integration tests for the ingest_pdf() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use rust_decimal_macros::dec;
use std::path::Path;
use tarifa_core::error::TarifaError;
use tarifa_core::export::write_xlsx;
use tarifa_core::extraction::{PageContent, PdfExtractor};
use tarifa_core::ingest_pdf;
use tarifa_core::model::{TaxIncluded, COLUMNS};
use tarifa_core::profile::builtin::load_preset;
use tarifa_core::profile::schema::VendorProfile;
use tarifa_core::providers::ProviderRegistry;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TarifaError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl PdfExtractor for FailingExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TarifaError> {
        Err(TarifaError::Extraction("corrupt xref table".into()))
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

fn page(number: usize, text: &str) -> PageContent {
    PageContent {
        page_number: number,
        lines: text.lines().map(|s| s.to_string()).collect(),
    }
}

fn idc() -> VendorProfile {
    load_preset("idc").unwrap()
}

fn ingest(pages: Vec<PageContent>, source: &str) -> tarifa_core::model::RecordSet {
    let extractor = MockExtractor { pages };
    ingest_pdf(&[], &extractor, &idc(), "IDC", Path::new(source)).unwrap()
}

// ---------------------------------------------------------------------------
// Test 1: Full page with header, two products and a description line
// ---------------------------------------------------------------------------
#[test]
fn full_page_two_products() {
    let set = ingest(
        vec![page(
            1,
            "SKU IDC
NOMBRE DEL PRODUCTO
Laptop Notebook HP ProBook 450 G8
Core i5 8GB RAM 256GB SSD
123456 Extra Specs $1.200,00 + iva $1.150,00 + iva $1.100,00 + iva 50 UNIDADES En stock
Tecnical details line
Monitor Mouse Logitech MX Master 3
678901 Wireless $150,50 + iva $145,00 + iva $140,00 + iva +100 UNIDADES
",
        )],
        "test.pdf",
    );

    assert_eq!(set.len(), 2);
    assert_eq!(set.columns(), &COLUMNS);

    let first = &set.records[0];
    assert_eq!(first.supplier, "IDC");
    assert_eq!(first.supplier_sku, "123456");
    assert!(first.title.contains("Notebook HP ProBook"));
    assert!(first.title.contains("Core i5 8GB RAM"));
    assert_eq!(first.cost_x1_usd, Some(dec!(1200.00)));
    assert_eq!(first.cost_x3_usd, Some(dec!(1150.00)));
    assert_eq!(first.cost_x6_usd, Some(dec!(1100.00)));
    assert_eq!(first.stock, Some(50));
    assert_eq!(first.tax_included, TaxIncluded::No);
    assert_eq!(first.source_file, "test.pdf");

    let second = &set.records[1];
    assert_eq!(second.supplier_sku, "678901");
    assert!(second.title.contains("Mouse Logitech"));
    assert!(!second.title.contains("Tecnical"));
    assert_eq!(second.cost_x1_usd, Some(dec!(150.50)));
    assert_eq!(second.stock, Some(100));
}

// ---------------------------------------------------------------------------
// Test 2: End-to-end scenario with the English units marker
// ---------------------------------------------------------------------------
#[test]
fn single_product_units_marker() {
    let set = ingest(
        vec![page(
            1,
            "Laptop Notebook HP ProBook 450 G8
Core i5 8GB RAM 256GB SSD
123456 Extra Specs $1.200,00 + iva $1.150,00 + iva $1.100,00 + iva 50 UNITS En stock",
        )],
        "lista.pdf",
    );

    assert_eq!(set.len(), 1);
    let r = &set.records[0];
    assert_eq!(r.supplier_sku, "123456");
    assert_eq!(r.cost_x1_usd, Some(dec!(1200.00)));
    assert_eq!(r.cost_x3_usd, Some(dec!(1150.00)));
    assert_eq!(r.cost_x6_usd, Some(dec!(1100.00)));
    assert_eq!(r.stock, Some(50));
    assert!(r.title.contains("Notebook HP ProBook"));
    assert!(r.title.contains("Core i5 8GB RAM"));
}

// ---------------------------------------------------------------------------
// Test 3: No recognizable products -> empty set with canonical columns
// ---------------------------------------------------------------------------
#[test]
fn no_products_yields_empty_well_formed_set() {
    let set = ingest(vec![page(1, "Sin datos validos")], "empty.pdf");
    assert!(set.is_empty());
    assert_eq!(set.columns().len(), 15);
    assert_eq!(set.columns(), &COLUMNS);
}

#[test]
fn noise_only_document_yields_empty_set() {
    let set = ingest(
        vec![page(
            1,
            "SKU IDC\nNOMBRE DEL PRODUCTO\nFORMAS DE PAGO: Transferencia\n• Envio gratis",
        )],
        "noise.pdf",
    );
    assert!(set.is_empty());
}

// ---------------------------------------------------------------------------
// Test 4: Products spread over several pages, including a blank page
// ---------------------------------------------------------------------------
#[test]
fn multiple_pages_in_order() {
    let set = ingest(
        vec![
            page(
                1,
                "Laptop Producto Pagina 1
123456 Extra $100,00 + iva $95,00 + iva $90,00 + iva 10 UNIDADES",
            ),
            page(2, ""),
            page(
                3,
                "Monitor Producto Pagina 3
678901 Extra $200,00 + iva $190,00 + iva $180,00 + iva 20 UNIDADES",
            ),
        ],
        "multi.pdf",
    );

    assert_eq!(set.len(), 2);
    assert_eq!(set.records[0].supplier_sku, "123456");
    assert_eq!(set.records[1].supplier_sku, "678901");
    assert_eq!(set.records[1].stock, Some(20));
}

// ---------------------------------------------------------------------------
// Test 5: Missing prices and stock degrade to None, never abort
// ---------------------------------------------------------------------------
#[test]
fn missing_stock_keeps_eta_text() {
    let set = ingest(
        vec![page(
            1,
            "Laptop Producto Test
123456 Extra $100,00 + iva $95,00 + iva $90,00 + iva Consultar disponibilidad",
        )],
        "test.pdf",
    );

    let r = &set.records[0];
    assert_eq!(r.stock, None);
    assert!(r
        .eta_text
        .as_deref()
        .is_some_and(|e| e.contains("Consultar disponibilidad")));
}

#[test]
fn price_without_tax_marker_leaves_tiers_empty() {
    let set = ingest(
        vec![page(1, "Laptop Producto\n123456 Extra $100,00 10 UNIDADES")],
        "test.pdf",
    );

    assert_eq!(set.len(), 1);
    let r = &set.records[0];
    assert_eq!(r.cost_x1_usd, None);
    assert_eq!(r.cost_x3_usd, None);
    assert_eq!(r.cost_x6_usd, None);
    assert_eq!(r.stock, Some(10));
}

#[test]
fn optional_fields_are_none() {
    let set = ingest(
        vec![page(
            1,
            "Laptop Producto Test\n123456 Extra $100,00 + iva 10 UNIDADES",
        )],
        "/ruta/completa/archivo.pdf",
    );

    let r = &set.records[0];
    assert!(r.brand.is_none());
    assert!(r.model.is_none());
    assert!(r.ean_upc.is_none());
    assert!(r.category.is_none());
    assert!(r.condition.is_none());
    assert_eq!(r.source_file, "archivo.pdf");
}

// ---------------------------------------------------------------------------
// Test 6: Extraction failures propagate to the caller
// ---------------------------------------------------------------------------
#[test]
fn extraction_error_propagates() {
    let result = ingest_pdf(&[], &FailingExtractor, &idc(), "IDC", Path::new("x.pdf"));
    assert!(matches!(result, Err(TarifaError::Extraction(_))));
}

// ---------------------------------------------------------------------------
// Test 7: Registry dispatch and export round-trip
// ---------------------------------------------------------------------------
#[test]
fn registry_dispatch_then_export() {
    let mut registry = ProviderRegistry::builtin();
    registry.register("mock_pdf", |input: &Path, supplier: &str| {
        let extractor = MockExtractor {
            pages: vec![page(
                1,
                "Laptop Producto Test\n123456 Extra $100,00 + iva 10 UNIDADES",
            )],
        };
        ingest_pdf(&[], &extractor, &idc(), supplier, input)
    });

    let provider = match registry.get("mock_pdf") {
        Ok(p) => p,
        Err(e) => panic!("provider missing: {e}"),
    };
    let set = provider(Path::new("in/lista.pdf"), "IDC").unwrap();
    assert_eq!(set.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out/idc.xlsx");
    let written = write_xlsx(&set, &out).unwrap();
    assert!(written.exists());
}

#[test]
fn unknown_provider_error_lists_available() {
    let registry = ProviderRegistry::builtin();
    let err = match registry.get("nope") {
        Err(e) => e,
        Ok(_) => panic!("lookup should fail"),
    };
    assert_eq!(
        err.to_string(),
        "provider not registered: nope. Available: idc_pdf"
    );
}
