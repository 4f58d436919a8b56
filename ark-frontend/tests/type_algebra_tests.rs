//! Properties of the type algebra over a spread of sample types

use ark_frontend::ast::{Attr, Variable, VariableDecl};
use ark_frontend::types::{PrimitiveType, StructType, Type, POINTER_MARKER};
use std::rc::Rc;

fn sample_types() -> Vec<Rc<Type>> {
    let mut types: Vec<Rc<Type>> = PrimitiveType::ALL
        .into_iter()
        .map(|p| Rc::new(Type::Primitive(p)))
        .collect();

    let mut vec3 = StructType::new("Vec3");
    vec3.attrs.push(Attr::flag("packed"));
    for axis in ["x", "y", "z"] {
        vec3.fields.push(VariableDecl::new(Variable::new(axis, Rc::new(PrimitiveType::F32.into()))));
    }
    types.push(Rc::new(Type::Struct(Rc::new(vec3))));

    let char_ptr = Rc::new(Type::pointer_to(Rc::new(PrimitiveType::U8.into())));
    types.push(Rc::new(Type::pointer_to(char_ptr)));
    types
}

fn wrap(ty: &Rc<Type>, layers: usize) -> Rc<Type> {
    (0..layers).fold(Rc::clone(ty), |inner, _| Rc::new(Type::pointer_to(inner)))
}

#[test]
fn raw_type_has_no_indirection() {
    for ty in sample_types() {
        assert_eq!(ty.raw_type().levels_of_indirection(), 0, "raw type of {ty}");
    }
}

#[test]
fn pointer_adds_one_level() {
    for ty in sample_types() {
        let ptr = Type::pointer_to(Rc::clone(&ty));
        assert_eq!(ptr.levels_of_indirection(), ty.levels_of_indirection() + 1);
    }
}

#[test]
fn raw_type_is_stable_under_wrapping() {
    for ty in sample_types() {
        for depth in 0..5 {
            let wrapped = wrap(&ty, depth);
            assert_eq!(wrapped.raw_type(), ty.raw_type());
            assert!(std::ptr::eq(wrapped.raw_type(), ty.raw_type()));
        }
    }
}

#[test]
fn pointer_names_compose() {
    for ty in sample_types() {
        let ptr = Type::pointer_to(Rc::clone(&ty));
        assert_eq!(ptr.type_name(), format!("{}{}", POINTER_MARKER, ty.type_name()));

        let raw = ty.raw_type();
        let depth = 3;
        let name = wrap(&ty, depth).type_name();
        let markers = depth + ty.levels_of_indirection();
        assert_eq!(name, format!("{}{}", POINTER_MARKER.repeat(markers), raw.type_name()));
    }
}

#[test]
fn classification_is_exclusive_and_primitive_only() {
    for ty in sample_types() {
        assert!(!(ty.is_integer_type() && ty.is_floating_type()), "{ty}");
        if !matches!(*ty, Type::Primitive(_)) {
            assert!(!ty.is_integer_type(), "{ty}");
            assert!(!ty.is_floating_type(), "{ty}");
        }
    }
}

#[test]
fn double_pointer_to_i32() {
    let ty = wrap(&Rc::new(Type::Primitive(PrimitiveType::I32)), 2);
    assert_eq!(ty.levels_of_indirection(), 2);
    assert_eq!(ty.raw_type(), &Type::Primitive(PrimitiveType::I32));
    assert_eq!(ty.type_name(), "^^i32");
}

#[test]
fn shared_types_serialize_by_value() {
    let byte = Rc::new(Type::Primitive(PrimitiveType::U8));
    let ptr = Type::pointer_to(Rc::clone(&byte));
    let json = serde_json::to_value(&ptr).unwrap();
    assert_eq!(json["Pointer"]["addressee"]["Primitive"], "u8");
}
