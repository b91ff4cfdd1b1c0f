use super::*;
use pretty_assertions::assert_eq;

fn header(name: &str) -> DefinitionHeader {
    DefinitionHeader {
        name: name.to_string(),
        source_path: PathBuf::from(format!("{name}.the")),
        import_path: PathBuf::from(format!("{name}.h")),
    }
}

fn color_enum() -> EnumDef {
    EnumDef {
        header: header("Color"),
        elements: vec![
            EnumElement::new("RED", ""),
            EnumElement::new("GREEN", ""),
            EnumElement::new("BLUE", ""),
            EnumElement::new(INVALID_ENUM_VALUE, INVALID_ENUM_COMMENT),
        ],
        ty: StorageType::U8,
        max_val: Some(2),
        invalid_val: INVALID_ENUM_VALUE.to_string(),
        imports: Vec::new(),
    }
}

// === Identifiers ===

#[test]
fn identifiers_accepted() {
    assert!(is_identifier("Color"));
    assert!(is_identifier("_private"));
    assert!(is_identifier("Packet2"));
    assert!(is_identifier("a_b_c"));
}

#[test]
fn identifiers_rejected() {
    assert!(!is_identifier(""));
    assert!(!is_identifier("2fast"));
    assert!(!is_identifier("with-dash"));
    assert!(!is_identifier("with space"));
    assert!(!is_identifier("Ünicode"));
}

// === Kinds ===

#[test]
fn kind_from_extension() {
    assert_eq!(
        Kind::from_path(Path::new("bit/net/Header.btx")),
        Some(Kind::Bitfield)
    );
    assert_eq!(Kind::from_path(Path::new("enum/Color.the")), Some(Kind::Enum));
    assert_eq!(Kind::from_path(Path::new("Color.h")), None);
    assert_eq!(Kind::from_path(Path::new("Makefile")), None);
}

// === Enum accessors ===

#[test]
fn enum_user_elements_exclude_sentinel() {
    let def = color_enum();
    let values: Vec<&str> = def.user_elements().iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["RED", "GREEN", "BLUE"]);
    assert_eq!(def.invalid_ordinal(), 3);
}

#[test]
fn definition_union_dispatch() {
    let def = Definition::Enum(Rc::new(color_enum()));
    assert_eq!(def.kind(), Kind::Enum);
    assert_eq!(def.name(), "Color");
    assert_eq!(def.ty(), StorageType::U8);
    assert_eq!(def.element_count(), 4);
    assert!(def.import_paths().is_empty());
}

#[test]
fn bitfield_total_bits() {
    let field = |name: &str, size: u32, offset: u64| BitElement {
        name: name.to_string(),
        size,
        ty: StorageType::U8,
        offset,
        comment: String::new(),
    };
    let imported = Rc::new(BitfieldDef {
        header: header("Inner"),
        elements: vec![field("x", 3, 0)],
        ty: StorageType::U8,
        imports: Vec::new(),
    });
    let def = BitfieldDef {
        header: header("Flags"),
        elements: vec![field("flag", 1, 0), field("counter", 7, 1)],
        ty: StorageType::U8,
        imports: vec![imported],
    };
    assert_eq!(def.total_bits(), 8);
    assert_eq!(def.name(), "Flags");

    let def = Definition::Bitfield(Rc::new(def));
    assert_eq!(def.import_paths(), vec![Path::new("Inner.h")]);
}
